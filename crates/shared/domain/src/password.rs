//! Password encoding - one-way hashing of plaintext credentials.
//!
//! The service layer depends on the [`PasswordEncoder`] capability only;
//! [`Argon2Encoder`] is the implementation wired in by the binaries.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{DomainError, DomainResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One-way credential encoder.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordEncoder: Send + Sync {
    /// Hash a plaintext password for storage
    fn encode(&self, plain_text: &str) -> DomainResult<String>;

    /// Check a plaintext password against a stored hash
    fn matches(&self, plain_text: &str, hash: &str) -> bool;
}

/// Argon2id encoder producing salted PHC strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Encoder;

impl Argon2Encoder {
    pub fn new() -> Self {
        Self
    }

    /// Get Argon2 instance with default config.
    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PasswordEncoder for Argon2Encoder {
    fn encode(&self, plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn matches(&self, plain_text: &str, hash: &str) -> bool {
        // Malformed hashes never match
        PasswordHash::new(hash)
            .map(|parsed| {
                Self::argon2()
                    .verify_password(plain_text.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_and_match() {
        let encoder = Argon2Encoder::new();
        let hash = encoder.encode("abcd123!").unwrap();

        assert!(encoder.matches("abcd123!", &hash));
        assert!(!encoder.matches("abcd124!", &hash));
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = Argon2Encoder::new().encode("Valid123!").unwrap();

        assert_ne!(hash, "Valid123!");
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let encoder = Argon2Encoder::new();
        let first = encoder.encode("Valid123!").unwrap();
        let second = encoder.encode("Valid123!").unwrap();

        assert_ne!(first, second);
        assert!(encoder.matches("Valid123!", &first));
        assert!(encoder.matches("Valid123!", &second));
    }

    #[test]
    fn test_malformed_hash_never_matches() {
        assert!(!Argon2Encoder::new().matches("Valid123!", "not-a-phc-string"));
    }
}
