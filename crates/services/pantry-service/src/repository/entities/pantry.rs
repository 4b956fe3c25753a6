//! Pantry database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::PantryEntry;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pantry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pantry_id: i32,
    pub app_user_id: i32,
    pub ingredient_id: i32,
    pub measurement_id: i32,
    pub quantity: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for PantryEntry {
    fn from(model: Model) -> Self {
        PantryEntry {
            pantry_id: model.pantry_id,
            app_user_id: model.app_user_id,
            ingredient_id: model.ingredient_id,
            measurement_id: model.measurement_id,
            quantity: model.quantity,
        }
    }
}
