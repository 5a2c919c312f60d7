use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

/// Open a pooled connection using the pool settings from `cfg`.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    cfg.validate()?;
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    // an in-memory SQLite database lives exactly as long as its one connection
    if !cfg.is_sqlite() {
        opts.idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), max_connections = cfg.max_connections, "database_connected");
    Ok(db)
}

/// Load `.env` if present and connect to `DATABASE_URL` with default pool settings.
pub async fn connect_from_env() -> anyhow::Result<DatabaseConnection> {
    let _ = dotenvy::dotenv();
    let mut cfg = DatabaseConfig::default();
    cfg.normalize_from_env();
    connect(&cfg).await
}
