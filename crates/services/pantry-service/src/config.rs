//! Pantry service configuration.

use common::DatabaseConfig;

const DEFAULT_DATABASE_URL: &str = "sqlite://pantry.db?mode=rwc";

/// Pantry service configuration.
#[derive(Debug, Clone)]
pub struct PantryServiceConfig {
    /// Pantry database connection settings
    pub database: DatabaseConfig,
}

impl PantryServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// `PANTRY_SERVICE_DATABASE_URL` wins over the shared `DATABASE_URL`.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig::from_env("PANTRY_SERVICE_DATABASE_URL", DEFAULT_DATABASE_URL),
        }
    }
}

impl Default for PantryServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: DEFAULT_DATABASE_URL.to_string(),
                ..DatabaseConfig::default()
            },
        }
    }
}
