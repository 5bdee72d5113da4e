//! ORM demo routes: `/api/users` and `/api/posts` backed by SQLite through the model façade.

use crate::handlers::{not_found, posts, users};
use crate::routes::{common_routes_with_ready, with_layers};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use serde_json::json;

async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the ORM demo",
        "endpoints": [
            "GET /api/users",
            "GET /api/users/:id",
            "POST /api/users",
            "DELETE /api/users/:id",
            "GET /api/posts?authorId=",
            "GET /api/posts/:id",
            "POST /api/posts",
        ],
    }))
}

pub fn api_routes(state: AppState) -> Router {
    let api = Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::read).delete(users::delete))
        .route("/posts", get(posts::list).post(posts::create))
        .route("/posts/:id", get(posts::read));
    let app = Router::new()
        .route("/", get(index))
        .nest("/api", api)
        .with_state(state.clone())
        .merge(common_routes_with_ready(state))
        .fallback(not_found);
    with_layers(app)
}
