//! SQLite pool setup.

use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open a pool on `database_url`, creating the database file if it does not exist.
/// `sqlite::memory:` gets a single connection so every query sees the same database.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let in_memory = is_memory_url(database_url);
    let mut opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::InvalidSetting {
            name: "DATABASE_URL",
            message: e.to_string(),
        })?
        .create_if_missing(true)
        .foreign_keys(true);
    if !in_memory {
        opts = opts.journal_mode(SqliteJournalMode::Wal);
    }
    let mut pool_opts = SqlitePoolOptions::new().max_connections(5);
    if in_memory {
        // The database lives only as long as its connection.
        pool_opts = pool_opts.max_connections(1).idle_timeout(None).max_lifetime(None);
    }
    let pool = pool_opts.connect_with(opts).await?;
    tracing::info!(database_url = %database_url, "connected to sqlite");
    Ok(pool)
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
