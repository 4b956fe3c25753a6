//! Pantry Service Library
//!
//! Listing, adding and deleting the ingredient quantities a user keeps,
//! backed by the pantry database. Embedded by the `pantry-app` binary.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::{AppResult, MigrateAction};

use crate::config::PantryServiceConfig;
use crate::infra::Database;
use crate::repository::PantryStore;
use crate::service::PantryManager;

/// Connect to the pantry database, applying pending migrations.
pub async fn connect(config: &PantryServiceConfig) -> AppResult<Database> {
    let db = Database::connect(&config.database).await?;
    info!("Pantry service database ready");
    Ok(db)
}

/// Wire the pantry service over an open database.
pub fn pantry_service(db: &Database) -> Arc<PantryManager> {
    let repo = Arc::new(PantryStore::new(db.get_connection()));
    Arc::new(PantryManager::new(repo))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(config: &PantryServiceConfig, action: MigrateAction) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Pantry service migrations applied");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Pantry service: rolled back last migration");
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await? {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("pantry-service {} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Pantry service database reset and migrations applied");
        }
    }

    Ok(())
}
