//! Execute a [`QueryBuf`] against a SQLite pool.

use crate::error::QueryError;
use crate::sql::{bind_params, row_to_json, QueryBuf};
use serde_json::{Map, Value};
use sqlx::{Row, SqlitePool};

pub async fn fetch_all(pool: &SqlitePool, q: &QueryBuf) -> Result<Vec<Map<String, Value>>, QueryError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let rows = bind_params(sqlx::query(&q.sql), &q.params).fetch_all(pool).await?;
    Ok(rows.iter().map(row_to_json).collect())
}

pub async fn fetch_one(pool: &SqlitePool, q: &QueryBuf) -> Result<Map<String, Value>, QueryError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let row = bind_params(sqlx::query(&q.sql), &q.params).fetch_one(pool).await?;
    Ok(row_to_json(&row))
}

pub async fn fetch_count(pool: &SqlitePool, q: &QueryBuf) -> Result<u64, QueryError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let row = bind_params(sqlx::query(&q.sql), &q.params).fetch_one(pool).await?;
    let n: i64 = row.try_get("count")?;
    Ok(u64::try_from(n).unwrap_or_default())
}

/// Run a statement and return the number of affected rows.
pub async fn execute(pool: &SqlitePool, q: &QueryBuf) -> Result<u64, QueryError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
    let done = bind_params(sqlx::query(&q.sql), &q.params).execute(pool).await?;
    Ok(done.rows_affected())
}
