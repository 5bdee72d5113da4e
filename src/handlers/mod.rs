//! HTTP handlers for the basic demo (echo, items, mock resources) and the ORM demo (users, posts).

pub mod basic;
pub mod posts;
pub mod resources;
pub mod users;

use crate::case::{object_keys_to_snake_case, value_keys_to_camel_case_recursive};
use crate::error::AppError;
use axum::http::Uri;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Default and maximum page sizes for database listings.
pub(crate) const DEFAULT_LIST_LIMIT: u64 = 100;
pub(crate) const MAX_LIST_LIMIT: u64 = 1000;

/// Router fallback: JSON 404 for any unregistered path.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

/// Request body as a snake_case object restricted to `allowed` keys.
pub(crate) fn body_to_map(value: Value, allowed: &[&str]) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(mut m) => {
            object_keys_to_snake_case(&mut m);
            m.retain(|k, _| allowed.contains(&k.as_str()));
            Ok(m)
        }
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

pub(crate) fn parse_bool(name: &str, s: &str) -> Result<bool, AppError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(AppError::BadRequest(format!("{} must be true or false", name))),
    }
}

pub(crate) fn param_u64(params: &HashMap<String, String>, name: &str) -> Result<Option<u64>, AppError> {
    params
        .get(name)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u64>()
                .map_err(|_| AppError::BadRequest(format!("{} must be a non-negative integer", name)))
        })
        .transpose()
}

pub(crate) fn param_i64(params: &HashMap<String, String>, name: &str) -> Result<Option<i64>, AppError> {
    params
        .get(name)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>().map_err(|_| AppError::BadRequest(format!("{} must be an integer", name))))
        .transpose()
}

/// Rows as returned to clients: camelCase keys.
pub(crate) fn camel_rows(mut rows: Vec<Value>) -> Vec<Value> {
    for r in rows.iter_mut() {
        value_keys_to_camel_case_recursive(r);
    }
    rows
}

pub(crate) fn camel_row(mut row: Value) -> Value {
    value_keys_to_camel_case_recursive(&mut row);
    row
}
