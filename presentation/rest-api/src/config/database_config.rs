use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

use super::error::{ConfigError, parse_or};

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

/// Database settings read from the environment
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: sqlx migrations directory
///   (default: "./infrastructure/persistence/migrations")
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5u32)?;
        let migrations_path =
            lookup("MIGRATIONS_PATH").unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

/// Initialize the connection pool and apply pending migrations
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let config =
        DatabaseConfig::new(settings.url.clone()).with_max_connections(settings.max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_database_url() {
        let result = DatabaseSettings::from_lookup(|_| None);
        assert_eq!(result, Err(ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn should_apply_defaults() {
        let settings = DatabaseSettings::from_lookup(|key| {
            (key == "DATABASE_URL").then(|| "postgres://localhost/inventory".to_string())
        })
        .unwrap();

        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.migrations_path, DEFAULT_MIGRATIONS_PATH);
    }

    #[test]
    fn should_read_overrides() {
        let settings = DatabaseSettings::from_lookup(|key| match key {
            "DATABASE_URL" => Some("postgres://db/inventory".to_string()),
            "DATABASE_MAX_CONNECTIONS" => Some("12".to_string()),
            "MIGRATIONS_PATH" => Some("/srv/migrations".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(settings.url, "postgres://db/inventory");
        assert_eq!(settings.max_connections, 12);
        assert_eq!(settings.migrations_path, "/srv/migrations");
    }
}
