//! Migration: Create the app_user table.

use sea_orm_migration::prelude::*;

use domain::{MAX_USERNAME_LENGTH, ROLE_USER};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppUser::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AppUser::AppUserId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AppUser::Username)
                            .string_len(MAX_USERNAME_LENGTH as u32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AppUser::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(AppUser::Enabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AppUser::Roles)
                            .string()
                            .not_null()
                            .default(ROLE_USER),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppUser::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum AppUser {
    Table,
    AppUserId,
    Username,
    PasswordHash,
    Enabled,
    Roles,
}
