//! Field-level validation rules for accounts and pantry entries.

use crate::constants::{
    MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH, MSG_PANTRY_INGREDIENT_REQUIRED,
    MSG_PANTRY_MEASUREMENT_REQUIRED, MSG_PANTRY_QUANTITY_INVALID, MSG_PANTRY_REQUIRED,
    MSG_PANTRY_USER_REQUIRED, MSG_PASSWORD_REQUIRED, MSG_PASSWORD_WEAK, MSG_USERNAME_MISSING_AT,
    MSG_USERNAME_REQUIRED, MSG_USERNAME_TOO_LONG, USERNAME_REQUIRED_CHAR,
};
use crate::pantry::PantryEntry;
use crate::result::{ServiceResult, Validation};

/// Check the password strength policy.
///
/// At least [`MIN_PASSWORD_LENGTH`] characters, with at least one digit, one
/// letter and one character that is neither.
///
/// Digits are ASCII `0-9`. Letters are Unicode `Alphabetic`, which also covers
/// letter numbers such as `Ⅻ` and a few combining marks; those count as
/// letters, not as "other" characters.
pub fn is_valid_password(password: &str) -> bool {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return false;
    }

    let mut digits = 0;
    let mut letters = 0;
    let mut others = 0;
    for c in password.chars() {
        if c.is_ascii_digit() {
            digits += 1;
        } else if c.is_alphabetic() {
            letters += 1;
        } else {
            others += 1;
        }
    }

    digits > 0 && letters > 0 && others > 0
}

/// Registration input that passed every account rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Validate registration input.
///
/// A missing or blank username, or a missing password, stops validation
/// immediately. Every other rule is checked and reported.
pub fn validate_account<'a>(
    username: Option<&'a str>,
    password: Option<&'a str>,
) -> ServiceResult<Credentials<'a>> {
    let username = match username {
        Some(username) if !username.trim().is_empty() => username,
        _ => return ServiceResult::invalid(MSG_USERNAME_REQUIRED),
    };

    let Some(password) = password else {
        return ServiceResult::invalid(MSG_PASSWORD_REQUIRED);
    };

    let mut validation = Validation::new();
    validation.check(!username.contains(USERNAME_REQUIRED_CHAR), MSG_USERNAME_MISSING_AT);
    validation.check(
        username.chars().count() > MAX_USERNAME_LENGTH,
        MSG_USERNAME_TOO_LONG,
    );
    validation.check(!is_valid_password(password), MSG_PASSWORD_WEAK);

    validation.finish(Credentials { username, password })
}

/// Validate a pantry entry before it is stored, handing it back on success.
pub fn validate_pantry_entry(entry: Option<PantryEntry>) -> ServiceResult<PantryEntry> {
    let Some(entry) = entry else {
        return ServiceResult::invalid(MSG_PANTRY_REQUIRED);
    };

    let mut validation = Validation::new();
    validation.check(entry.app_user_id == 0, MSG_PANTRY_USER_REQUIRED);
    // NaN fails too
    validation.check(!(entry.quantity > 0.0), MSG_PANTRY_QUANTITY_INVALID);
    validation.check(entry.ingredient_id <= 0, MSG_PANTRY_INGREDIENT_REQUIRED);
    validation.check(entry.measurement_id <= 0, MSG_PANTRY_MEASUREMENT_REQUIRED);

    validation.finish(entry)
}
