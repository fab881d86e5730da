use axum_helpers::TokenConfig;
use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, database::DatabaseConfig, env_or_default,
    env_required, server::ServerConfig,
};

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Where access tokens on protected routes get verified
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthBackend {
    /// In-process with the local token maker
    Local,
    /// `sso.v1.Auth/Verify` at the given address
    Remote { address: String },
}

impl FromEnv for AuthBackend {
    /// `AUTH_BACKEND` is `local` (default) or `remote`; `remote` requires `SSO_ADDRESS`.
    fn from_env() -> Result<Self, ConfigError> {
        match env_or_default("AUTH_BACKEND", "local").trim() {
            backend if backend.eq_ignore_ascii_case("local") => Ok(Self::Local),
            backend if backend.eq_ignore_ascii_case("remote") => Ok(Self::Remote {
                address: env_required("SSO_ADDRESS")?,
            }),
            other => Err(ConfigError::ParseError {
                key: "AUTH_BACKEND".to_string(),
                details: format!("expected 'local' or 'remote', got '{}'", other),
            }),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub token: TokenConfig,
    pub auth_backend: AuthBackend,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080
        let database = DatabaseConfig::from_env()?; // Required - will fail if not set
        let token = TokenConfig::from_env()?; // Required - will fail if not set
        let auth_backend = AuthBackend::from_env()?;

        Ok(Self {
            app: app_info!(),
            environment,
            server,
            database,
            token,
            auth_backend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    #[test]
    fn test_config_from_env_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/gallery")),
                ("JWT_SECRET", Some(SECRET)),
                ("AUTH_BACKEND", None),
                ("HOST", None),
                ("PORT", None),
                ("APP_ENV", None),
                ("RUN_MIGRATIONS", None),
                ("ACCESS_TOKEN_TTL_SECS", None),
                ("REFRESH_TOKEN_TTL_SECS", None),
            ],
            || {
                let config = Config::from_env().unwrap();

                assert_eq!(config.app.name, "gallery_api");
                assert_eq!(config.environment, Environment::Development);
                assert_eq!(config.server.port, 8080);
                assert!(config.database.run_migrations);
                assert_eq!(config.token.access_token_ttl.num_seconds(), 900);
                assert_eq!(config.token.refresh_token_ttl.num_seconds(), 86_400);
                assert_eq!(config.auth_backend, AuthBackend::Local);
            },
        );
    }

    #[test]
    fn test_config_requires_jwt_secret() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/gallery")),
                ("JWT_SECRET", None),
            ],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }

    #[test]
    fn test_remote_backend_requires_address() {
        temp_env::with_vars(
            [("AUTH_BACKEND", Some("remote")), ("SSO_ADDRESS", None)],
            || {
                assert!(matches!(
                    AuthBackend::from_env(),
                    Err(ConfigError::MissingEnvVar(key)) if key == "SSO_ADDRESS"
                ));
            },
        );

        temp_env::with_vars(
            [
                ("AUTH_BACKEND", Some("Remote")),
                ("SSO_ADDRESS", Some("http://sso:50051")),
            ],
            || {
                assert_eq!(
                    AuthBackend::from_env().unwrap(),
                    AuthBackend::Remote {
                        address: "http://sso:50051".to_string()
                    }
                );
            },
        );
    }

    #[test]
    fn test_unknown_backend_is_parse_error() {
        temp_env::with_var("AUTH_BACKEND", Some("ldap"), || {
            assert!(matches!(
                AuthBackend::from_env(),
                Err(ConfigError::ParseError { key, .. }) if key == "AUTH_BACKEND"
            ));
        });
    }
}
