//! Error handling for the Scorecard server

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scorecard::ScorecardError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// API error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,

    /// Machine-readable error kind
    pub kind: String,

    /// Always `error`
    pub status: String,
}

/// Server error types
#[derive(Debug, Error)]
pub enum ServerError {
    /// Scoring library error
    #[error(transparent)]
    Scoring(#[from] ScorecardError),

    /// Request body could not be read as JSON
    #[error("Request body must be JSON: {0}")]
    BadRequest(String),

    /// Request body exceeded the configured size limit
    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    /// Scoring took longer than the configured timeout
    #[error("Scoring timed out after {0} seconds")]
    Timeout(u64),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Scoring(ScorecardError::InvalidInput(_)) | ServerError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::Scoring(ScorecardError::InvalidRubric(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServerError::Scoring(ScorecardError::Provider(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ServerError::Scoring(e) => e.kind(),
            ServerError::BadRequest(_) => "bad_request",
            ServerError::PayloadTooLarge(_) => "payload_too_large",
            ServerError::Timeout(_) => "timeout",
            ServerError::Internal(_) => "internal_error",
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(rejection.body_text())
        } else {
            ServerError::BadRequest(rejection.body_text())
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(kind = self.error_type(), "{}", self);
        }

        let error_response = ErrorResponse {
            error: self.to_string(),
            kind: self.error_type().to_string(),
            status: "error".to_string(),
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type for server operations
pub type ServerResult<T> = Result<T, ServerError>;
