//! HTTP error handling and response conversion.
//!
//! Domain errors are mapped to status codes here. Validation failures carry
//! their field-level messages to the client so the comment form can show
//! them next to the inputs.

use crate::domain::post::source::FetchError;
use crate::domain::shared::errors::{BlogError, FieldError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// Application-level errors returned from handlers.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Malformed request (400).
    BadRequest(String),

    /// Field-level validation failed (422).
    Validation(Vec<FieldError>),

    /// Another operation on the same resource is still running (409).
    Conflict(String),

    /// The simulated backend rejected a write (503). Safe to retry.
    ExternalService(String),

    /// The post or comment documents could not be loaded (502).
    Upstream(String),

    /// Unclassified internal error (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Validation(fields) => write!(f, "Validation error: {} field(s)", fields.len()),
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::ExternalService(msg) => write!(f, "External service error: {}", msg),
            Self::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::ExternalService(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-safe error message (without implementation details).
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Resource not found".into(),
            Self::BadRequest(msg) => msg.clone(),
            Self::Validation(_) => "Please correct the highlighted fields".into(),
            Self::Conflict(msg) => msg.clone(),
            Self::ExternalService(msg) => msg.clone(),
            Self::Upstream(_) => "Content is temporarily unavailable".into(),
            Self::Internal(_) => "Internal server error".into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR | StatusCode::BAD_GATEWAY => {
                tracing::error!("error={}", self);
            }
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::CONFLICT => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::info!("error={}", self);
            }
        }

        let body = match self {
            Self::Validation(fields) => json!({ "error": message, "fields": fields }),
            _ => json!({ "error": message }),
        };
        (status, Json(body)).into_response()
    }
}

// === Domain Error Conversion ===

impl From<BlogError> for AppError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::Validation(fields) => AppError::Validation(fields),
            BlogError::Network(msg) | BlogError::Submit(msg) => AppError::ExternalService(msg),
            BlogError::NotFound(msg) => AppError::NotFound(msg),
            BlogError::Fetch(e) => {
                let detail = e.to_string();
                if let FetchError::Malformed { .. } = e {
                    tracing::error!(malformed_payload = %detail);
                }
                AppError::Upstream(detail)
            }
        }
    }
}

// === General Fallback Error Conversion ===

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(anyhow_error = %err, "Unclassified error with chain");
        err.chain().for_each(|cause| {
            tracing::error!(cause = %cause, "Error source");
        });
        AppError::Internal("Operation failed".into())
    }
}
