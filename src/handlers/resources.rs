//! Basic demo: create, read, update, delete and list over the in-memory resource list.

use crate::error::AppError;
use crate::mock::{NewResource, ResourcePatch};
use crate::response::{success_many, success_one, success_one_ok};
use crate::state::DemoState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn list(State(state): State<DemoState>) -> impl IntoResponse {
    success_many(state.resources.list().await)
}

pub async fn create(
    State(state): State<DemoState>,
    Json(body): Json<NewResource>,
) -> Result<impl IntoResponse, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }
    let created = state.resources.insert(body).await;
    tracing::debug!(id = %created.id, "resource created");
    Ok(success_one(created))
}

pub async fn read(State(state): State<DemoState>, Path(id): Path<String>) -> Result<impl IntoResponse, AppError> {
    let found = state
        .resources
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("resource {}", id)))?;
    Ok(success_one_ok(found))
}

pub async fn update(
    State(state): State<DemoState>,
    Path(id): Path<String>,
    Json(patch): Json<ResourcePatch>,
) -> Result<impl IntoResponse, AppError> {
    if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    let updated = state
        .resources
        .update(&id, patch)
        .await
        .ok_or_else(|| AppError::NotFound(format!("resource {}", id)))?;
    Ok(success_one_ok(updated))
}

pub async fn delete(State(state): State<DemoState>, Path(id): Path<String>) -> Result<StatusCode, AppError> {
    state
        .resources
        .remove(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("resource {}", id)))?;
    Ok(StatusCode::NO_CONTENT)
}
