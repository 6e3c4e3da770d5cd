//! Relay Error Types
//!
//! Every failure maps to the same 500 response; the detail only goes to the
//! log, tagged with a request id that is also returned to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for every failed submission
pub const FAILURE_MESSAGE: &str = "Failed to save restaurant information";

/// Message returned for a forwarded submission
pub const SUCCESS_MESSAGE: &str = "Restaurant information saved";

/// Relay error types
#[derive(Error, Debug)]
pub enum RelayError {
    /// Request body is not JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Downstream could not be reached or did not answer in time
    #[error("Downstream request failed: {0}")]
    Downstream(String),

    /// Downstream answered with a non-2xx status
    #[error("Downstream returned {status}: {body}")]
    DownstreamStatus { status: u16, body: String },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelayError {
    fn code(&self) -> &'static str {
        match self {
            RelayError::InvalidBody(_) => "INVALID_BODY",
            RelayError::Downstream(_) => "DOWNSTREAM_UNREACHABLE",
            RelayError::DownstreamStatus { .. } => "DOWNSTREAM_ERROR",
            RelayError::Internal(_) => "INTERNAL_ERROR",
            RelayError::Io(_) => "IO_ERROR",
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Downstream(format!("timed out: {}", err))
        } else {
            RelayError::Downstream(err.to_string())
        }
    }
}

/// Response body for both outcomes
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            request_id: None,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();

        tracing::error!(
            request_id = %request_id,
            error_code = %self.code(),
            error_message = %self,
            "Failed to relay restaurant information"
        );

        let body = MessageResponse {
            message: FAILURE_MESSAGE.to_string(),
            request_id: Some(request_id),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Result type for relay operations
pub type RelayResult<T> = Result<T, RelayError>;
