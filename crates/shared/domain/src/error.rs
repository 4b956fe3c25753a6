//! Domain-level errors.
//!
//! Rule violations are reported through `ServiceResult`; `DomainError` covers
//! the failures a domain operation raises instead.

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Password hashing failed
    #[error("Password error: {0}")]
    Password(String),
}

impl DomainError {
    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
