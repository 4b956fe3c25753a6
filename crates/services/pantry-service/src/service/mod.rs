//! Pantry use cases.

mod pantry_service;

pub use pantry_service::{PantryManager, PantryService};
