//! Pantry service - ingredient quantities owned by users.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{validate_pantry_entry, PantryEntry, ServiceResult, MSG_PANTRY_ADD_FAILED};

use crate::repository::PantryRepository;

/// Pantry service trait for dependency injection.
#[async_trait]
pub trait PantryService: Send + Sync {
    /// List every pantry entry
    async fn find_all(&self) -> AppResult<Vec<PantryEntry>>;

    /// List the entries owned by one user
    async fn find_by_user_id(&self, app_user_id: i32) -> AppResult<Vec<PantryEntry>>;

    /// Validate and store a new entry
    async fn add(&self, entry: Option<PantryEntry>) -> AppResult<ServiceResult<PantryEntry>>;

    /// Delete an entry, reporting whether a row was removed
    async fn delete(&self, pantry_id: i32) -> AppResult<bool>;
}

/// Concrete implementation of the pantry service.
pub struct PantryManager {
    repo: Arc<dyn PantryRepository>,
}

impl PantryManager {
    /// Create new pantry service instance with repository
    pub fn new(repo: Arc<dyn PantryRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PantryService for PantryManager {
    async fn find_all(&self) -> AppResult<Vec<PantryEntry>> {
        self.repo.find_all().await
    }

    async fn find_by_user_id(&self, app_user_id: i32) -> AppResult<Vec<PantryEntry>> {
        self.repo.find_by_user_id(app_user_id).await
    }

    async fn add(&self, entry: Option<PantryEntry>) -> AppResult<ServiceResult<PantryEntry>> {
        let entry = match validate_pantry_entry(entry) {
            ServiceResult::Success(entry) => entry,
            ServiceResult::Failure(messages) => {
                tracing::warn!(violations = messages.len(), "Pantry entry rejected");
                return Ok(ServiceResult::Failure(messages));
            }
        };

        match self.repo.add(entry).await? {
            Some(stored) => {
                tracing::info!(
                    pantry_id = stored.pantry_id,
                    app_user_id = stored.app_user_id,
                    "Pantry entry added"
                );
                Ok(ServiceResult::success(stored))
            }
            None => {
                tracing::warn!("Pantry entry was not stored");
                Ok(ServiceResult::invalid(MSG_PANTRY_ADD_FAILED))
            }
        }
    }

    async fn delete(&self, pantry_id: i32) -> AppResult<bool> {
        let removed = self.repo.delete(pantry_id).await?;
        tracing::debug!(pantry_id, removed, "Pantry entry delete");
        Ok(removed)
    }
}
