//! Account service - registration and account lookups.
//!
//! Registration input is validated in full before anything reaches storage;
//! failures come back as `ServiceResult` messages. Username uniqueness is left
//! to the repository, whose duplicate-key signal becomes one more message.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::{validate_account, AppUser, PasswordEncoder, ServiceResult, MSG_USERNAME_TAKEN};

use crate::repository::AppUserRepository;

/// Account service trait for dependency injection.
#[async_trait]
pub trait AppUserService: Send + Sync {
    /// List every account
    async fn find_all(&self) -> AppResult<Vec<AppUser>>;

    /// Find account by ID (`None` when absent)
    async fn find_by_user_id(&self, app_user_id: i32) -> AppResult<Option<AppUser>>;

    /// Validate and register a new account
    async fn create(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> AppResult<ServiceResult<AppUser>>;
}

/// Authentication capability: resolve a username to an account usable for login.
#[async_trait]
pub trait AuthenticationLookup: Send + Sync {
    /// Fails with [`AppError::NotFound`] when the account is missing or disabled
    async fn authentication_lookup(&self, username: &str) -> AppResult<AppUser>;
}

/// Concrete implementation of the account service.
pub struct AppUserManager {
    repo: Arc<dyn AppUserRepository>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl AppUserManager {
    /// Create new account service with its collaborators
    pub fn new(repo: Arc<dyn AppUserRepository>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self { repo, encoder }
    }
}

#[async_trait]
impl AppUserService for AppUserManager {
    async fn find_all(&self) -> AppResult<Vec<AppUser>> {
        self.repo.find_all().await
    }

    async fn find_by_user_id(&self, app_user_id: i32) -> AppResult<Option<AppUser>> {
        tracing::debug!(app_user_id, "Looking up account");
        self.repo.find_by_user_id(app_user_id).await
    }

    async fn create(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> AppResult<ServiceResult<AppUser>> {
        let credentials = match validate_account(username, password) {
            ServiceResult::Success(credentials) => credentials,
            ServiceResult::Failure(messages) => {
                tracing::warn!(violations = messages.len(), "Account registration rejected");
                return Ok(ServiceResult::Failure(messages));
            }
        };

        let password_hash = self.encoder.encode(credentials.password)?;
        let user = AppUser::new(credentials.username, password_hash);

        match self.repo.create(user).await {
            Ok(user) => {
                tracing::info!(app_user_id = user.app_user_id, "Account registered");
                Ok(ServiceResult::success(user))
            }
            Err(AppError::DuplicateKey(_)) => {
                tracing::warn!(username = credentials.username, "Username already taken");
                Ok(ServiceResult::invalid(MSG_USERNAME_TAKEN))
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl AuthenticationLookup for AppUserManager {
    async fn authentication_lookup(&self, username: &str) -> AppResult<AppUser> {
        match self.repo.find_by_username(username).await? {
            Some(user) if user.can_authenticate() => Ok(user),
            Some(_) => {
                tracing::debug!(username, "Account disabled");
                Err(AppError::NotFound)
            }
            None => {
                tracing::debug!(username, "Account not found");
                Err(AppError::NotFound)
            }
        }
    }
}
