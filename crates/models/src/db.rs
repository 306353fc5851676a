use std::{str::FromStr, time::Duration};

use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    ConnectOptions as _,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, SqlxSqliteConnector};
use tracing::info;

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    cfg.validate()?;
    let db = if cfg.is_in_memory() {
        connect_in_memory(cfg).await?
    } else {
        let mut opt = ConnectOptions::new(cfg.url.clone());
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
            .sqlx_logging(cfg.sqlx_logging);
        Database::connect(opt).await?
    };
    info!(backend = ?db.get_database_backend(), in_memory = cfg.is_in_memory(), "database connected");
    Ok(db)
}

/// Every pooled connection to `:memory:` is a separate database, so the pool
/// holds exactly one connection that is never reaped or recycled.
async fn connect_in_memory(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = SqliteConnectOptions::from_str(&cfg.url)?;
    if !cfg.sqlx_logging {
        options = options.disable_statement_logging();
    }
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .connect_with(options)
        .await?;
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// Connect and bring the schema up to date.
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(cfg).await?;
    migration::Migrator::up(&db, None).await?;
    info!("migrations applied");
    Ok(db)
}
