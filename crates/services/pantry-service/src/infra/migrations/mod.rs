//! Pantry database migrations.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_pantry_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    // Own tracking table, so both services can share one database
    fn migration_table_name() -> DynIden {
        Alias::new("seaql_migrations_pantry").into_iden()
    }

    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240101_000001_create_pantry_table::Migration)]
    }
}
