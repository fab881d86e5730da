use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Payload of every token minted by [`TokenMaker`](super::TokenMaker).
///
/// Registered claims (`jti`, `sub`, `iat`, `exp`) sit next to the gallery identity.
/// `sub` always carries the login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub id: i32,
    pub login: String,
    pub is_admin: bool,
    pub jti: String,
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl UserClaims {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            login: self.login.clone(),
            is_admin: self.is_admin,
        }
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.iat, 0).unwrap_or_default()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_default()
    }
}

/// Who is calling: the part of the claims handlers care about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "alice")]
    pub login: String,
    pub is_admin: bool,
}

/// Identity of an authenticated request plus the raw access token it presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessClaims {
    pub identity: Identity,
    pub access_token: String,
}

impl AccessClaims {
    pub fn new(identity: Identity, access_token: impl Into<String>) -> Self {
        Self {
            identity,
            access_token: access_token.into(),
        }
    }

    pub fn id(&self) -> i32 {
        self.identity.id
    }

    pub fn login(&self) -> &str {
        &self.identity.login
    }

    pub fn is_admin(&self) -> bool {
        self.identity.is_admin
    }

    /// Admins manage everything, everyone else only what they own.
    pub fn can_manage(&self, owner_id: i32) -> bool {
        self.identity.is_admin || self.identity.id == owner_id
    }

    /// [`can_manage`](Self::can_manage) as a guard for handlers.
    pub fn ensure_can_manage(&self, owner_id: i32) -> Result<(), super::AuthError> {
        if self.can_manage(owner_id) {
            Ok(())
        } else {
            Err(super::AuthError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(id: i32, is_admin: bool) -> AccessClaims {
        AccessClaims::new(
            Identity {
                id,
                login: "alice".to_string(),
                is_admin,
            },
            "token",
        )
    }

    #[test]
    fn test_owner_can_manage_own_resource() {
        assert!(claims(7, false).can_manage(7));
    }

    #[test]
    fn test_non_owner_cannot_manage() {
        let claims = claims(7, false);
        assert!(!claims.can_manage(8));
        assert!(matches!(
            claims.ensure_can_manage(8),
            Err(super::super::AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_admin_can_manage_anything() {
        assert!(claims(1, true).can_manage(42));
        assert!(claims(1, true).ensure_can_manage(42).is_ok());
    }

    #[test]
    fn test_user_claims_timestamps() {
        let claims = UserClaims {
            id: 1,
            login: "alice".to_string(),
            is_admin: false,
            jti: "jti".to_string(),
            sub: "alice".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_000_900,
        };

        assert_eq!(claims.issued_at().timestamp(), 1_700_000_000);
        assert_eq!(claims.expires_at().timestamp(), 1_700_000_900);
        assert_eq!(claims.identity().login, "alice");
    }
}
