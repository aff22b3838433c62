//! API error type and the JSON error envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use guardian_core::GuardianError;
use serde::Serialize;

/// Message shown to clients for every 500.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// `{"status":"error","error":"..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub error: String,
}

/// Errors returned by route handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 400, message passed through to the client.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 500, message logged but replaced in the response body.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = ErrorBody {
            status: "error",
            error: message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<GuardianError> for ApiError {
    fn from(err: GuardianError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
