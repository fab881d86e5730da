//! Token configuration loaded through the `FromEnv` trait from `core_config`.

use super::jwt::{ACCESS_TOKEN_TTL, REFRESH_TOKEN_TTL};
use chrono::Duration;
use core_config::{ConfigError, FromEnv, env_parse_or, env_required};

/// Minimum accepted length of the HMAC signing secret
pub const MIN_SECRET_LEN: usize = 32;

/// Longest accepted token lifetime (10 years), in seconds
pub const MAX_TOKEN_TTL_SECS: i64 = 10 * 365 * 86_400;

/// Signing secret and token lifetimes.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - at least 32 characters
/// - `ACCESS_TOKEN_TTL_SECS` (default 900)
/// - `REFRESH_TOKEN_TTL_SECS` (default 86400)
///
/// Both lifetimes must lie in `1..=MAX_TOKEN_TTL_SECS`.
///
/// # Example
///
/// ```ignore
/// use axum_helpers::auth::{TokenConfig, TokenMaker};
/// use core_config::FromEnv;
///
/// let config = TokenConfig::from_env()?;
/// let maker = TokenMaker::new(&config);
/// ```
#[derive(Clone)]
pub struct TokenConfig {
    /// HMAC signing secret
    pub secret: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
}

impl TokenConfig {
    /// Build a config with the default lifetimes (15 minutes / 24 hours).
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        validate_secret(&secret)?;

        Ok(Self {
            secret,
            access_token_ttl: Duration::seconds(ACCESS_TOKEN_TTL),
            refresh_token_ttl: Duration::seconds(REFRESH_TOKEN_TTL),
        })
    }
}

// The secret never shows up in debug output.
impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("refresh_token_ttl", &self.refresh_token_ttl)
            .finish()
    }
}

impl FromEnv for TokenConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;
        validate_secret(&secret)?;

        let access_token_ttl = positive_seconds("ACCESS_TOKEN_TTL_SECS", ACCESS_TOKEN_TTL)?;
        let refresh_token_ttl = positive_seconds("REFRESH_TOKEN_TTL_SECS", REFRESH_TOKEN_TTL)?;

        Ok(Self {
            secret,
            access_token_ttl,
            refresh_token_ttl,
        })
    }
}

fn validate_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.len() < MIN_SECRET_LEN {
        return Err(ConfigError::ParseError {
            key: "JWT_SECRET".to_string(),
            details: format!(
                "must be at least {MIN_SECRET_LEN} characters (got {}). Generate one with: openssl rand -base64 32",
                secret.len()
            ),
        });
    }
    Ok(())
}

fn positive_seconds(key: &str, default: i64) -> Result<Duration, ConfigError> {
    let secs = env_parse_or(key, default)?;
    if !(1..=MAX_TOKEN_TTL_SECS).contains(&secs) {
        return Err(ConfigError::ParseError {
            key: key.to_string(),
            details: format!("must be between 1 and {MAX_TOKEN_TTL_SECS} seconds (got {secs})"),
        });
    }
    Duration::try_seconds(secs).ok_or_else(|| ConfigError::ParseError {
        key: key.to_string(),
        details: format!("out of range (got {secs})"),
    })
}
