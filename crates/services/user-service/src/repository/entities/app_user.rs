//! Account database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{AppUser, ROLE_SEPARATOR};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "app_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub app_user_id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub password_hash: String,
    pub enabled: bool,
    /// Role names joined by `ROLE_SEPARATOR`
    pub roles: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Flatten a role set into its column form
pub fn join_roles(roles: &[String]) -> String {
    roles.join(&ROLE_SEPARATOR.to_string())
}

/// Split the roles column, skipping empty segments
pub fn split_roles(column: &str) -> Vec<String> {
    column
        .split(ROLE_SEPARATOR)
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert database model to domain entity
impl From<Model> for AppUser {
    fn from(model: Model) -> Self {
        AppUser {
            app_user_id: model.app_user_id,
            username: model.username,
            password_hash: model.password_hash,
            enabled: model.enabled,
            roles: split_roles(&model.roles),
        }
    }
}
