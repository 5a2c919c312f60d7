#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory SQLite database; nothing is shared between tests.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    common::logging::init_logging_test();
    let db = models::db::connect(&DatabaseConfig::sqlite_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
