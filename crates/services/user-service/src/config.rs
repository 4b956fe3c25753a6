//! User service configuration.

use common::DatabaseConfig;

/// Default account database (SQLite file next to the binary)
const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Account database connection settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `USER_SERVICE_DATABASE_URL` wins over the shared `DATABASE_URL`.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env("USER_SERVICE_DATABASE_URL", DEFAULT_DATABASE_URL),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                ..DatabaseConfig::default()
            },
        }
    }
}
