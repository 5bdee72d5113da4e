//! DDL for the demo database: `users` and `posts`.

use crate::error::AppError;
use sqlx::SqlitePool;

const USERS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS "users" (
    "id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "name" TEXT NOT NULL,
    "email" TEXT NOT NULL UNIQUE,
    "password" TEXT,
    "secret_key" TEXT,
    "age" INTEGER,
    "active" BOOLEAN NOT NULL DEFAULT 1,
    "created_at" TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    "updated_at" TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const POSTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS "posts" (
    "id" INTEGER PRIMARY KEY AUTOINCREMENT,
    "user_id" INTEGER NOT NULL REFERENCES "users"("id") ON DELETE CASCADE,
    "title" TEXT NOT NULL,
    "content" TEXT,
    "published" BOOLEAN NOT NULL DEFAULT 0,
    "created_at" TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    "updated_at" TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const POSTS_USER_INDEX: &str = r#"CREATE INDEX IF NOT EXISTS "posts_user_id_idx" ON "posts" ("user_id")"#;

/// Create the demo tables if they do not exist. Safe to run on every start.
pub async fn apply_demo_schema(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for ddl in [USERS_DDL, POSTS_DDL, POSTS_USER_INDEX] {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::debug!("demo schema applied");
    Ok(())
}
