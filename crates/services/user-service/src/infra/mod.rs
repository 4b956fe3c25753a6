//! Infrastructure layer - account database and its migrations.

pub mod migrations;

pub use migrations::Migrator;

/// Account database, shaped by the user service migrator
pub type Database = common::Database<Migrator>;
