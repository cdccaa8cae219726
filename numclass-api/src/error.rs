//! Error types for numclass-api
//!
//! Invalid input is answered with the flat classification error envelope
//! (`number`, `error`, `message`). Anything else is an internal fault.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use numclass_common::types::ErrorResult;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Raw `number` value is not an integer (400); carries the raw value
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<numclass_common::Error> for ApiError {
    fn from(err: numclass_common::Error) -> Self {
        match err {
            numclass_common::Error::InvalidInput(raw) => ApiError::InvalidNumber(raw),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidNumber(raw) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResult::invalid_input(raw))).into_response()
            }
            ApiError::Internal(message) => {
                error!("Internal error: {}", message);
                let body = Json(json!({
                    "error": {
                        "code": "INTERNAL_ERROR",
                        "message": message,
                    }
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
