//! Repository layer for account data access.

pub mod entities;
mod user_repository;

pub use user_repository::{AppUserRepository, AppUserStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockAppUserRepository;
