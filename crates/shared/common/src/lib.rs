//! Common utilities shared across all services.
//!
//! This crate provides:
//! - Unified error handling for the service layer
//! - Configuration structures
//! - Database connection and migration management (`database` feature)

pub mod config;
#[cfg(feature = "database")]
pub mod db;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};

#[cfg(feature = "database")]
pub use db::{Database, MigrateAction};
#[cfg(feature = "database")]
pub use error::map_db_err;
