//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Database configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Load from environment.
    ///
    /// `url_var` takes precedence over the shared `DATABASE_URL`; `default_url`
    /// is used when neither is set.
    pub fn from_env(url_var: &str, default_url: &str) -> Self {
        let defaults = Self::default();
        Self {
            url: env::var(url_var)
                .or_else(|_| env::var("DATABASE_URL"))
                .unwrap_or_else(|_| default_url.to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_connections),
            min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.min_connections),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://pantry.db?mode=rwc".to_string(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub filter: String,
}

impl LogConfig {
    /// Verbose mode forces `debug`; otherwise `RUST_LOG` or `info`.
    pub fn from_env(verbose: bool) -> Self {
        let filter = if verbose {
            "debug".to_string()
        } else {
            env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
        };
        Self { filter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_forces_debug() {
        assert_eq!(LogConfig::from_env(true).filter, "debug");
    }

    #[test]
    fn test_database_defaults() {
        let config = DatabaseConfig::default();

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 1);
    }

    #[test]
    fn test_database_url_falls_back_to_default() {
        let config = DatabaseConfig::from_env("PANTRY_TEST_UNSET_DATABASE_URL", "sqlite::memory:");

        // DATABASE_URL may be set in the environment running the tests
        if env::var("DATABASE_URL").is_err() {
            assert_eq!(config.url, "sqlite::memory:");
        }
    }
}
