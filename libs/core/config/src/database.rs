use crate::{env_parse_or, env_required, ConfigError, FromEnv};

/// PostgreSQL connection settings
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    /// Apply pending migrations on startup
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 2,
            connect_timeout_secs: 8,
            run_migrations: true,
        }
    }
}

impl FromEnv for DatabaseConfig {
    /// Requires `DATABASE_URL`. Pool sizing is read from `DB_MAX_CONNECTIONS`,
    /// `DB_MIN_CONNECTIONS` and `DB_CONNECT_TIMEOUT_SECS`.
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::new(env_required("DATABASE_URL")?);

        Ok(Self {
            max_connections: env_parse_or("DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: env_parse_or("DB_MIN_CONNECTIONS", defaults.min_connections)?,
            connect_timeout_secs: env_parse_or(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            run_migrations: env_parse_or("RUN_MIGRATIONS", defaults.run_migrations)?,
            ..defaults
        })
    }
}
