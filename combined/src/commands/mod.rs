//! CLI command implementations.
//!
//! Commands print JSON to stdout and return whether the operation succeeded.

pub mod migrate;
pub mod pantry;
pub mod users;

use serde::Serialize;

use common::{AppError, AppResult};
use domain::ServiceResult;

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("JSON encoding failed: {}", e)))?;
    println!("{}", json);
    Ok(())
}

/// Print a service result, reporting whether it succeeded
pub fn report<T: Serialize>(result: &ServiceResult<T>) -> AppResult<bool> {
    print_json(result)?;
    if !result.is_success() {
        for message in result.messages() {
            tracing::warn!("{}", message.message);
        }
    }
    Ok(result.is_success())
}
