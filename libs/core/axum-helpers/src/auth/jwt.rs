use super::claims::UserClaims;
use super::config::TokenConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

/// Token time-to-live defaults, in seconds
pub const ACCESS_TOKEN_TTL: i64 = 900; // 15 minutes
pub const REFRESH_TOKEN_TTL: i64 = 86_400; // 24 hours

#[derive(Debug, Error)]
pub enum TokenError {
    /// Every verification failure collapses into this variant.
    #[error("invalid token")]
    Invalid,

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("token lifetime out of range")]
    Lifetime,
}

/// Stateless HS256 signer and verifier.
///
/// Keys are derived once from the configured secret; the maker does no I/O and can be
/// shared freely behind an `Arc`.
#[derive(Clone)]
pub struct TokenMaker {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenMaker {
    pub fn new(config: &TokenConfig) -> Self {
        Self::from_secret(config.secret.as_bytes())
    }

    pub fn from_secret(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Only the HMAC family; anything else (RS*, ES*, none) fails before the signature check.
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Mint a token for the given identity, valid for `duration` from now.
    ///
    /// Every call draws a fresh random `jti`.
    pub fn create_token(
        &self,
        id: i32,
        login: &str,
        is_admin: bool,
        duration: Duration,
    ) -> Result<(String, UserClaims), TokenError> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(duration).ok_or(TokenError::Lifetime)?;

        let claims = UserClaims {
            id,
            login: login.to_string(),
            is_admin,
            jti: Uuid::new_v4().to_string(),
            sub: login.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let header = Header {
            alg: Algorithm::HS256,
            ..Default::default()
        };

        let token = encode(&header, &claims, &self.encoding_key).map_err(TokenError::Signing)?;

        Ok((token, claims))
    }

    /// Verify signature, algorithm and expiry, then decode the claims.
    pub fn verify_token(&self, token: &str) -> Result<UserClaims, TokenError> {
        decode::<UserClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token verification failed: {}", e);
                TokenError::Invalid
            })
    }
}
