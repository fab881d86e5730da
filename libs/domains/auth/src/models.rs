use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Server-side record of a login.
///
/// Keyed by the refresh token's `jti`. Only `access_token` and `is_revoked` ever change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub user_login: String,
    pub access_token: String,
    pub refresh_token: String,
    pub is_revoked: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(input: CreateSession) -> Self {
        Self {
            id: input.id,
            user_login: input.user_login,
            access_token: input.access_token,
            refresh_token: input.refresh_token,
            is_revoked: false,
            created_at: Utc::now(),
            expires_at: input.expires_at,
        }
    }
}

/// Input for a new session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSession {
    pub id: String,
    pub user_login: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Credentials of a user as stored in `users_auth`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAuth {
    pub user_id: i32,
    pub login: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Input for registering a user; the password is already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub login: String,
    pub password_hash: String,
    pub is_admin: bool,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub login: String,
    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub session_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub access_token_expires_at: DateTime<Utc>,
    pub refresh_token_expires_at: DateTime<Utc>,
    #[schema(example = "alice")]
    pub login: String,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct RenewRequest {
    #[validate(length(max = 4096))]
    pub refresh_token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RenewResponse {
    pub access_token: String,
    pub access_token_expires_at: DateTime<Utc>,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(max = 64))]
    #[schema(example = "alice")]
    pub login: String,
    #[validate(length(max = 128))]
    #[schema(example = "secret123")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "alice")]
    pub login: String,
}
