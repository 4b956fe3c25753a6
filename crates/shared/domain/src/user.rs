//! Application user account entity.

use serde::{Deserialize, Serialize};

use crate::constants::ROLE_USER;

/// User account as seen by the service layer.
///
/// The id is `0` until storage assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppUser {
    pub app_user_id: i32,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub enabled: bool,
    pub roles: Vec<String>,
}

impl AppUser {
    /// Create a new, enabled account with the default role
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            app_user_id: 0,
            username: username.into(),
            password_hash: password_hash.into(),
            enabled: true,
            roles: vec![ROLE_USER.to_string()],
        }
    }

    /// Check whether the account has been persisted
    pub fn is_persisted(&self) -> bool {
        self.app_user_id != 0
    }

    /// An account may authenticate only while enabled
    pub fn can_authenticate(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_defaults() {
        let user = AppUser::new("cook@example.com", "hash");

        assert_eq!(user.app_user_id, 0);
        assert!(!user.is_persisted());
        assert!(user.enabled);
        assert!(user.can_authenticate());
        assert_eq!(user.roles, vec![ROLE_USER.to_string()]);
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = AppUser::new("cook@example.com", "secret-hash");
        let json = serde_json::to_string(&user).unwrap();

        assert!(json.contains("cook@example.com"));
        assert!(!json.contains("secret-hash"));
    }
}
