//! API Error Handling
//!
//! Unified error types and conversion for API responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Fixed message returned when no validator backend is installed.
/// Deliberately distinct from validation failures so operators can tell
/// "fix the service" apart from "fix your input".
pub const VALIDATOR_UNAVAILABLE_MESSAGE: &str = "no Jenkinsfile validator is available";

/// API error type
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    ValidatorUnavailable,
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::ValidatorUnavailable => {
                tracing::error!("No validator backend is installed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    VALIDATOR_UNAVAILABLE_MESSAGE.to_string(),
                )
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
