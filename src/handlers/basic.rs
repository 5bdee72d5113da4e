//! Basic demo: welcome, path-parameter echo, and generated paged items.

use crate::extractors::PageParams;
use crate::response::{success_one_ok, success_page};
use crate::state::DemoState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

pub async fn index(State(state): State<DemoState>) -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to the basic demo",
        "environment": state.settings.app_env,
    }))
}

/// `GET /users/:id`: the id is echoed back exactly as received.
pub async fn get_user(Path(id): Path<String>) -> impl IntoResponse {
    success_one_ok(json!({ "id": id }))
}

pub async fn get_user_post(Path((user_id, post_id)): Path<(String, String)>) -> impl IntoResponse {
    success_one_ok(json!({ "userId": user_id, "postId": post_id }))
}

/// `GET /items`: item ids on page `p` with size `l` run from `(p-1)*l + 1` to `p*l`.
pub async fn list_items(page: PageParams) -> impl IntoResponse {
    let items: Vec<Item> = (page.offset().saturating_add(1)..=page.last())
        .map(|id| Item {
            id,
            name: format!("Item {}", id),
        })
        .collect();
    let count = items.len();
    success_page(
        items,
        json!({
            "page": page.page,
            "limit": page.limit,
            "search": page.search,
            "count": count,
        }),
    )
}
