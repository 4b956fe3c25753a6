//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the account and pantry entities, the result container returned by
//! mutating service operations, and the validation rules feeding it.

pub mod constants;
pub mod error;
pub mod pantry;
pub mod password;
pub mod result;
pub mod user;
pub mod validation;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use pantry::PantryEntry;
pub use password::{Argon2Encoder, PasswordEncoder};
pub use result::{ResultKind, ResultMessage, ServiceResult, Validation};
pub use user::AppUser;
pub use validation::{is_valid_password, validate_account, validate_pantry_entry, Credentials};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockPasswordEncoder;
