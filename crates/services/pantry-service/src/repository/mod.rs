//! Repository layer for pantry data access.

pub mod entities;
mod pantry_repository;

pub use pantry_repository::{PantryRepository, PantryStore};

#[cfg(any(test, feature = "test-utils"))]
pub use pantry_repository::MockPantryRepository;
