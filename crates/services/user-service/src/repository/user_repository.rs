//! Account repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::app_user::{self, join_roles, ActiveModel, Entity as AppUserEntity};
use common::{map_db_err, AppError, AppResult};
use domain::AppUser;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Entity name reported with duplicate-key failures
const ENTITY: &str = "AppUser";

/// Account repository trait for dependency injection.
///
/// Username uniqueness is enforced here, not by callers: `create` fails with
/// [`AppError::DuplicateKey`] when storage rejects a repeated username.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AppUserRepository: Send + Sync {
    /// List every account
    async fn find_all(&self) -> AppResult<Vec<AppUser>>;

    /// Find account by ID
    async fn find_by_user_id(&self, app_user_id: i32) -> AppResult<Option<AppUser>>;

    /// Find account by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<AppUser>>;

    /// Persist a new account, returning it with its assigned ID
    async fn create(&self, user: AppUser) -> AppResult<AppUser>;
}

/// SeaORM-backed account repository
pub struct AppUserStore {
    db: DatabaseConnection,
}

impl AppUserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppUserRepository for AppUserStore {
    async fn find_all(&self) -> AppResult<Vec<AppUser>> {
        let models = AppUserEntity::find()
            .order_by_asc(app_user::Column::AppUserId)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(AppUser::from).collect())
    }

    async fn find_by_user_id(&self, app_user_id: i32) -> AppResult<Option<AppUser>> {
        let result = AppUserEntity::find_by_id(app_user_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AppUser::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<AppUser>> {
        let result = AppUserEntity::find()
            .filter(app_user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(AppUser::from))
    }

    async fn create(&self, user: AppUser) -> AppResult<AppUser> {
        let active_model = ActiveModel {
            app_user_id: NotSet,
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            enabled: Set(user.enabled),
            roles: Set(join_roles(&user.roles)),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_db_err(e, ENTITY))?;

        tracing::info!(app_user_id = model.app_user_id, "Account stored");
        Ok(AppUser::from(model))
    }
}
