//! Pantry repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use super::entities::pantry::{self, ActiveModel, Entity as PantryEntity};
use common::{AppError, AppResult};
use domain::PantryEntry;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Pantry repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PantryRepository: Send + Sync {
    /// List every pantry entry
    async fn find_all(&self) -> AppResult<Vec<PantryEntry>>;

    /// List the entries owned by one user
    async fn find_by_user_id(&self, app_user_id: i32) -> AppResult<Vec<PantryEntry>>;

    /// Store an entry; `None` when the stored row could not be read back
    async fn add(&self, entry: PantryEntry) -> AppResult<Option<PantryEntry>>;

    /// Delete an entry by ID, reporting whether a row was removed
    async fn delete(&self, pantry_id: i32) -> AppResult<bool>;
}

/// SeaORM-backed pantry repository
pub struct PantryStore {
    db: DatabaseConnection,
}

impl PantryStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PantryRepository for PantryStore {
    async fn find_all(&self) -> AppResult<Vec<PantryEntry>> {
        let models = PantryEntity::find()
            .order_by_asc(pantry::Column::PantryId)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(PantryEntry::from).collect())
    }

    async fn find_by_user_id(&self, app_user_id: i32) -> AppResult<Vec<PantryEntry>> {
        let models = PantryEntity::find()
            .filter(pantry::Column::AppUserId.eq(app_user_id))
            .order_by_asc(pantry::Column::PantryId)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(PantryEntry::from).collect())
    }

    async fn add(&self, entry: PantryEntry) -> AppResult<Option<PantryEntry>> {
        let active_model = ActiveModel {
            pantry_id: NotSet,
            app_user_id: Set(entry.app_user_id),
            ingredient_id: Set(entry.ingredient_id),
            measurement_id: Set(entry.measurement_id),
            quantity: Set(entry.quantity),
        };

        let inserted = PantryEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        let stored = PantryEntity::find_by_id(inserted.last_insert_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(stored.map(PantryEntry::from))
    }

    async fn delete(&self, pantry_id: i32) -> AppResult<bool> {
        let result = PantryEntity::delete_by_id(pantry_id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, app_user_id: i32) -> pantry::Model {
        pantry::Model {
            pantry_id: id,
            app_user_id,
            ingredient_id: 2,
            measurement_id: 1,
            quantity: 3.0,
        }
    }

    #[tokio::test]
    async fn test_find_by_user_id_maps_models() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([vec![model(1, 7), model(4, 7)]])
            .into_connection();

        let entries = PantryStore::new(db).find_by_user_id(7).await.unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.app_user_id == 7));
        assert_eq!(entries[1].pantry_id, 4);
    }

    #[tokio::test]
    async fn test_add_reads_back_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results([MockExecResult {
                last_insert_id: 5,
                rows_affected: 1,
            }])
            .append_query_results([vec![model(5, 7)]])
            .into_connection();

        let stored = PantryStore::new(db)
            .add(PantryEntry::new(7, 2, 1, 3.0))
            .await
            .unwrap();

        assert_eq!(stored, Some(PantryEntry::new(7, 2, 1, 3.0).with_id(5)));
    }

    #[tokio::test]
    async fn test_add_returns_none_when_row_is_missing() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results([MockExecResult {
                last_insert_id: 5,
                rows_affected: 1,
            }])
            .append_query_results([Vec::<pantry::Model>::new()])
            .into_connection();

        let stored = PantryStore::new(db)
            .add(PantryEntry::new(7, 2, 1, 3.0))
            .await
            .unwrap();

        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_removed_rows() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();
        let store = PantryStore::new(db);

        assert!(store.delete(5).await.unwrap());
        assert!(!store.delete(5).await.unwrap());
    }
}
