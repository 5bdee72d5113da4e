//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("model '{model}': {message}")]
    InvalidModel { model: String, message: String },
    #[error("unknown model: {0}")]
    UnknownModel(String),
    #[error("config load: {0}")]
    Load(String),
    #[error("invalid setting {name}: {message}")]
    InvalidSetting { name: &'static str, message: String },
}

/// Errors raised while rendering or executing a query chain.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("model has no table name")]
    MissingTable,
    #[error("unknown operator: {0}")]
    InvalidOperator(String),
    #[error("unknown sort direction: {0}")]
    InvalidDirection(String),
    #[error("empty column name")]
    EmptyColumn,
    #[error("nothing to insert")]
    EmptyInsert,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::Query(QueryError::InvalidOperator(_) | QueryError::InvalidDirection(_)) => {
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            AppError::Query(QueryError::EmptyInsert) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Query(_) => (StatusCode::INTERNAL_SERVER_ERROR, "query_error"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            AppError::Db(e) => {
                if let sqlx::Error::RowNotFound = e {
                    (StatusCode::NOT_FOUND, "not_found")
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, "database_error")
                }
            }
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
        }
    }
}

impl AppError {
    /// Like `From<QueryError>`, but a unique-constraint violation becomes `Conflict`.
    pub fn from_write(err: QueryError) -> Self {
        if let QueryError::Db(sqlx::Error::Database(ref db)) = err {
            if db.is_unique_violation() {
                return AppError::Conflict(db.message().to_string());
            }
        }
        AppError::Query(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                details: None,
            },
        };
        (status, Json(body)).into_response()
    }
}
