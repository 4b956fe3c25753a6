//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Role granted to every newly registered account
pub const ROLE_USER: &str = "USER";

/// Separator used when a role set is flattened into a single column
pub const ROLE_SEPARATOR: char = ',';

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum username length (in characters)
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Character every username must contain
pub const USERNAME_REQUIRED_CHAR: char = '@';

// =============================================================================
// Messages
// =============================================================================

pub const MSG_USERNAME_REQUIRED: &str = "Username is required.";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required.";
pub const MSG_USERNAME_MISSING_AT: &str = "Username must contain an @ symbol.";
pub const MSG_USERNAME_TOO_LONG: &str = "Username must be less than 50 characters.";
pub const MSG_PASSWORD_WEAK: &str =
    "Password must be at least 8 character and contain a digit, a letter, and a non-digit/non-letter.";
pub const MSG_USERNAME_TAKEN: &str = "The provided username already exists";

pub const MSG_PANTRY_REQUIRED: &str = "Pantry cannot be null.";
pub const MSG_PANTRY_USER_REQUIRED: &str = "User ID is required.";
pub const MSG_PANTRY_QUANTITY_INVALID: &str = "Quantity cannot be zero or negative";
pub const MSG_PANTRY_INGREDIENT_REQUIRED: &str = "Ingredient ID is required.";
pub const MSG_PANTRY_MEASUREMENT_REQUIRED: &str = "Measurement unit is required.";
pub const MSG_PANTRY_ADD_FAILED: &str = "Failed to add ingredient to pantry.";
