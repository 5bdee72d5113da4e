//! ORM demo: `/api/users` through the `users` model (password and secret_key never leave the server).

use crate::config::USERS_MODEL;
use crate::error::AppError;
use crate::handlers::{
    body_to_map, camel_row, camel_rows, param_i64, param_u64, parse_bool, parse_id, DEFAULT_LIST_LIMIT,
    MAX_LIST_LIMIT,
};
use crate::query::{Operator, Predicate};
use crate::response::{success_many_with_total, success_one, success_one_ok};
use crate::service::{RequestValidator, Rules, ValidationRule};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

const USER_FIELDS: &[&str] = &["name", "email", "password", "secret_key", "age", "active"];

fn user_rules() -> Rules {
    Rules::from([
        ("name", ValidationRule::required().length(Some(1), Some(100))),
        ("email", ValidationRule::required().format("email").length(None, Some(254))),
        ("password", ValidationRule::default().format("string").length(Some(8), None)),
        ("secret_key", ValidationRule::default().pattern("^[A-Za-z0-9_-]+$")),
        ("age", ValidationRule::default().format("integer").range(Some(0.0), Some(150.0))),
        ("active", ValidationRule::default().format("boolean")),
    ])
}

/// `GET /api/users?limit=&offset=&active=&minAge=`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let users = state.models.model(USERS_MODEL)?;
    let mut query = users.query();
    if let Some(active) = params.get("active") {
        query = query.where_eq("active", parse_bool("active", active)?);
    }
    if let Some(min_age) = param_i64(&params, "minAge")? {
        query = query.filter(Predicate::new("age", Operator::Ge, min_age));
    }
    let total = query.count(&state.pool).await?;
    let limit = param_u64(&params, "limit")?.unwrap_or(DEFAULT_LIST_LIMIT).min(MAX_LIST_LIMIT);
    let offset = param_u64(&params, "offset")?.unwrap_or(0);
    let rows = query.limit(limit).offset(offset).all(&state.pool).await?;
    Ok(success_many_with_total(camel_rows(rows), total))
}

pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let users = state.models.model(USERS_MODEL)?;
    let row = users
        .find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", id_str)))?;
    Ok(success_one_ok(camel_row(row)))
}

pub async fn create(State(state): State<AppState>, Json(body): Json<Value>) -> Result<impl IntoResponse, AppError> {
    let body = body_to_map(body, USER_FIELDS)?;
    RequestValidator::validate(&body, &user_rules())?;
    let users = state.models.model(USERS_MODEL)?;
    let row = users.create(&state.pool, &body).await.map_err(AppError::from_write)?;
    tracing::info!(user = ?row.get("id"), "user created");
    Ok(success_one(camel_row(row)))
}

pub async fn delete(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    let users = state.models.model(USERS_MODEL)?;
    if !users.destroy(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("user {}", id_str)));
    }
    Ok(StatusCode::NO_CONTENT)
}
