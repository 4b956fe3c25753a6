//! Database connection and migration management.
//!
//! Each service owns its migrator and its migration tracking table;
//! `Database<M>` ties a pooled sea-orm connection to the migrator `M` that
//! shapes it. Services may point at separate databases or share one.

use std::marker::PhantomData;

use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

use crate::config::DatabaseConfig;

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Database wrapper for connection management
pub struct Database<M> {
    connection: DatabaseConnection,
    migrator: PhantomData<M>,
}

impl<M: MigratorTrait> Database<M> {
    /// Initialize database connection and run migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;

        // Run pending migrations
        M::up(&db.connection, None).await?;
        tracing::info!("Database connected and migrations applied");

        Ok(db)
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self::from_connection(connection))
    }

    /// Wrap an existing connection.
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self {
            connection,
            migrator: PhantomData,
        }
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        M::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        M::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        // A fresh database has no tracking table yet
        M::install(&self.connection).await?;

        Ok(M::get_migration_with_status(&self.connection)
            .await?
            .iter()
            .map(|m| (m.name().to_string(), matches!(m.status(), MigrationStatus::Applied)))
            .collect())
    }

    /// Roll back every migration of `M`, then run them all again.
    ///
    /// Only the tables `M` created are dropped; another service sharing the
    /// database keeps its data.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        M::reset(&self.connection).await?;
        M::up(&self.connection, None).await
    }
}
