//! API error type and its HTTP mapping.
//!
//! Validation failures become 400 responses that name the offending field.
//! Everything else is logged and reported as a generic 500 so storage
//! details never reach the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::query::ValidationError;
use crate::store::StoreError;

/// Code sent with every 500 response.
pub const INTERNAL_CODE: &str = "INTERNAL";

/// Code sent for unknown routes.
pub const NOT_FOUND_CODE: &str = "NOT_FOUND";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

/// JSON error envelope: `{"error": {"code": ..., "message": ..., "field": ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                field: None,
            },
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(err) => {
                tracing::debug!(field = err.field, reason = %err.reason, "rejected request");
                let mut body = ErrorBody::new(ValidationError::CODE, err.to_string());
                body.error.field = Some(err.field.to_string());
                body
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "request failed");
                ErrorBody::new(INTERNAL_CODE, "Unexpected error")
            }
        };
        (status, Json(body)).into_response()
    }
}
