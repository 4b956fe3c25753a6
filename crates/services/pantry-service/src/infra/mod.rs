//! Infrastructure layer - pantry database and its migrations.

pub mod migrations;

pub use migrations::Migrator;

/// Pantry database, shaped by the pantry service migrator
pub type Database = common::Database<Migrator>;
