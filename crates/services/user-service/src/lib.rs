//! User Service Library
//!
//! Account registration, lookup and the authentication lookup, backed by the
//! account database. Embedded by the `pantry-app` binary.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::{AppResult, MigrateAction};
use domain::Argon2Encoder;

use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::AppUserStore;
use crate::service::AppUserManager;

/// Connect to the account database, applying pending migrations.
pub async fn connect(config: &UserServiceConfig) -> AppResult<Database> {
    let db = Database::connect(&config.database).await?;
    info!("User service database ready");
    Ok(db)
}

/// Wire the account service over an open database.
pub fn account_service(db: &Database) -> Arc<AppUserManager> {
    let repo = Arc::new(AppUserStore::new(db.get_connection()));
    let encoder = Arc::new(Argon2Encoder::new());
    Arc::new(AppUserManager::new(repo, encoder))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(config: &UserServiceConfig, action: MigrateAction) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("User service migrations applied");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("User service: rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("user-service {} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("User service database reset and migrations applied");
        }
    }

    Ok(())
}
