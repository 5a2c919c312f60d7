//! Migrator registering entity tables in dependency order.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_tenant;
mod m20240101_000002_create_upstream;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_tenant::Migration),
            Box::new(m20240101_000002_create_upstream::Migration),
        ]
    }
}
