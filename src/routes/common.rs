//! Health, version and (for the ORM demo) SQLite readiness.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

/// What `/ready` reports about the pool.
#[derive(Serialize)]
struct PoolStatus {
    backend: &'static str,
    reachable: bool,
    connections: u32,
    idle: usize,
}

async fn pool_status(pool: &SqlitePool) -> PoolStatus {
    let reachable = sqlx::query("SELECT 1").fetch_optional(pool).await.is_ok();
    if !reachable {
        tracing::warn!("sqlite pool failed readiness query");
    }
    PoolStatus {
        backend: "sqlite",
        reachable,
        connections: pool.size(),
        idle: pool.num_idle(),
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 200 with pool details when `SELECT 1` succeeds, 503 otherwise.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let database = pool_status(&state.pool).await;
    let (code, status) = if database.reachable {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };
    (code, Json(json!({ "status": status, "database": database })))
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `/health` and `/version`, usable with any router state.
pub fn common_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}

/// [`common_routes`] plus `/ready` against the ORM demo's pool.
pub fn common_routes_with_ready(state: AppState) -> Router {
    common_routes::<AppState>()
        .route("/ready", get(ready))
        .with_state(state)
}
