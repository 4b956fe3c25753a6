//! Migration: Create the pantry table.
//!
//! `app_user_id` points into the account database, which lives with the user
//! service, so it carries an index but no foreign key.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pantry::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Pantry::PantryId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Pantry::AppUserId).integer().not_null())
                    .col(ColumnDef::new(Pantry::IngredientId).integer().not_null())
                    .col(ColumnDef::new(Pantry::MeasurementId).integer().not_null())
                    .col(ColumnDef::new(Pantry::Quantity).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_pantry_app_user_id")
                    .table(Pantry::Table)
                    .col(Pantry::AppUserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_pantry_app_user_id")
                    .table(Pantry::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pantry::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Pantry {
    Table,
    PantryId,
    AppUserId,
    IngredientId,
    MeasurementId,
    Quantity,
}
