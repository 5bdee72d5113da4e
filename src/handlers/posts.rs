//! ORM demo: `/api/posts`, filterable by author.

use crate::case::to_snake_case;
use crate::config::{POSTS_MODEL, USERS_MODEL};
use crate::error::AppError;
use crate::handlers::{
    body_to_map, camel_row, camel_rows, param_i64, param_u64, parse_bool, parse_id, DEFAULT_LIST_LIMIT,
    MAX_LIST_LIMIT,
};
use crate::query::Direction;
use crate::response::{success_many_with_total, success_one, success_one_ok};
use crate::service::{RequestValidator, Rules, ValidationRule};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

const POST_FIELDS: &[&str] = &["user_id", "title", "content", "published"];

/// Columns `GET /api/posts?order=` may sort by.
const SORTABLE: &[&str] = &["id", "user_id", "title", "published", "created_at", "updated_at"];

/// `order` (camelCase or snake_case column, default `id`) and `dir` (default `desc`).
fn sort_params(params: &HashMap<String, String>) -> Result<(String, Direction), AppError> {
    let column = match params.get("order").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(c) => {
            let c = to_snake_case(c);
            if !SORTABLE.contains(&c.as_str()) {
                return Err(AppError::BadRequest(format!("cannot order posts by '{}'", c)));
            }
            c
        }
        None => "id".to_string(),
    };
    let dir = match params.get("dir").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(d) => d.parse::<Direction>()?,
        None => Direction::Desc,
    };
    Ok((column, dir))
}

fn post_rules() -> Rules {
    Rules::from([
        ("user_id", ValidationRule::required().format("integer")),
        ("title", ValidationRule::required().length(Some(1), Some(200))),
        ("content", ValidationRule::default().format("string").length(None, Some(10_000))),
        ("published", ValidationRule::default().format("boolean")),
    ])
}

/// `GET /api/posts?authorId=&published=&order=&dir=&limit=&offset=`, newest first unless ordered.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let (column, dir) = sort_params(&params)?;
    let posts = state.models.model(POSTS_MODEL)?;
    let mut query = posts.order_by(column, Some(dir));
    if let Some(author) = param_i64(&params, "authorId")? {
        query = query.where_eq("user_id", author);
    }
    if let Some(published) = params.get("published") {
        query = query.where_eq("published", parse_bool("published", published)?);
    }
    let total = query.count(&state.pool).await?;
    let limit = param_u64(&params, "limit")?.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT);
    let offset = param_u64(&params, "offset")?.unwrap_or(0);
    let rows = query.limit(limit).offset(offset).all(&state.pool).await?;
    Ok(success_many_with_total(camel_rows(rows), total))
}

pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let posts = state.models.model(POSTS_MODEL)?;
    let row = posts
        .find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {}", id_str)))?;
    Ok(success_one_ok(camel_row(row)))
}

pub async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body, POST_FIELDS)?;
    RequestValidator::validate(&body, &post_rules())?;
    let author = body.get("user_id").cloned().unwrap_or(Value::Null);
    let users = state.models.model(USERS_MODEL)?;
    if users.find(&state.pool, author.clone()).await?.is_none() {
        return Err(AppError::Validation(format!("userId {} does not reference an existing user", author)));
    }
    let posts = state.models.model(POSTS_MODEL)?;
    let row = posts.create(&state.pool, &body).await.map_err(AppError::from_write)?;
    Ok(success_one(camel_row(row)))
}
