//! Create `upstream` table.
//!
//! Named backend base URLs; `active` toggles without deleting the row.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Upstream::Table)
                    .if_not_exists()
                    .col(pk_auto(Upstream::Id))
                    .col(string_len(Upstream::Name, 128).unique_key())
                    .col(string_len(Upstream::BaseUrl, 512))
                    .col(boolean(Upstream::Active).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Upstream::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Upstream { Table, Id, Name, BaseUrl, Active }
