use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::llm::client::LlmError;
use crate::models::generated::ValidationError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Upstream(String),
    MalformedResponse(String),
    Database(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Upstream(msg) => write!(f, "Upstream provider error: {}", msg),
            ApiError::MalformedResponse(msg) => write!(f, "Malformed model response: {}", msg),
            ApiError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "upstream_error", msg),
            ApiError::MalformedResponse(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "malformed_response", msg)
            }
            ApiError::Database(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error", msg),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<crate::db::DatabaseError> for ApiError {
    fn from(err: crate::db::DatabaseError) -> Self {
        match err {
            crate::db::DatabaseError::NotFound(msg) => ApiError::NotFound(msg),
            crate::db::DatabaseError::ConnectionError(msg) => ApiError::Database(msg),
            crate::db::DatabaseError::TransactionError(msg) => ApiError::Database(msg),
            crate::db::DatabaseError::QueryError(e) => ApiError::Database(e.to_string()),
        }
    }
}

impl From<LlmError> for ApiError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Malformed(msg) => ApiError::MalformedResponse(msg),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::MalformedResponse(err.to_string())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
