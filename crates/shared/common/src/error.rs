//! Unified error handling for the service layer.
//!
//! Business failures (bad input, duplicate usernames) travel inside
//! `domain::ServiceResult`. `AppError` is the raised-failure channel: lookups
//! that must fail, and storage errors nobody anticipated.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    /// A unique constraint rejected the write
    #[error("Duplicate key for {0}")]
    DuplicateKey(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::DuplicateKey(_) => "DUPLICATE_KEY",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::DuplicateKey(entity) => format!("{} already exists", entity),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Password(msg) => AppError::Internal(msg),
        }
    }
}

// =============================================================================
// Database Error Conversion
// =============================================================================

/// Translate a storage error, surfacing unique-constraint violations as
/// [`AppError::DuplicateKey`] for `entity`.
#[cfg(feature = "database")]
pub fn map_db_err(err: sea_orm::DbErr, entity: &str) -> AppError {
    match err.sql_err() {
        Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(entity, %detail, "Unique constraint violated");
            AppError::DuplicateKey(entity.to_string())
        }
        _ => AppError::Database(err),
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn duplicate_key(entity: impl Into<String>) -> Self {
        AppError::DuplicateKey(entity.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::NotFound.code(), "NOT_FOUND");
        assert_eq!(AppError::duplicate_key("AppUser").code(), "DUPLICATE_KEY");
        assert_eq!(AppError::internal("boom").code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_user_message_hides_internal_details() {
        assert_eq!(AppError::internal("secret detail").user_message(), "An internal error occurred");
        assert_eq!(AppError::duplicate_key("AppUser").user_message(), "AppUser already exists");
        assert_eq!(AppError::NotFound.user_message(), "Resource not found");
    }

    #[test]
    fn test_domain_error_conversion() {
        assert!(matches!(
            AppError::from(DomainError::password("hash failed")),
            AppError::Internal(_)
        ));
    }

    #[test]
    fn test_option_ext() {
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
        assert!(matches!(None::<i32>.ok_or_not_found(), Err(AppError::NotFound)));
    }

    #[cfg(feature = "database")]
    #[test]
    fn test_non_unique_db_errors_stay_database_errors() {
        let err = map_db_err(sea_orm::DbErr::Custom("connection reset".into()), "AppUser");
        assert!(matches!(err, AppError::Database(_)));
    }
}
