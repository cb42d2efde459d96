//! Webhook errors and their HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use std::fmt::{Display, Formatter};

/// A callback that returned an error during fan-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallbackFailure {
    /// Position of the callback in registration order, from 0.
    pub index: usize,
    pub message: String,
}

impl Display for CallbackFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "callback #{}: {}", self.index, self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The body is not a valid payment notification.
    #[error("Invalid payment event: {0}")]
    InvalidEvent(#[source] serde_json::Error),
    /// The notification's signature does not match the configured salt.
    #[error("Invalid signature on payment event {id}")]
    InvalidSignature { id: String },
    /// At least one callback failed. Every callback was still invoked.
    #[error("{} callback(s) failed for invoice {event_id}: {}", .failures.len(), join(.failures))]
    CallbackFailed {
        event_id: String,
        failures: Vec<CallbackFailure>,
    },
    #[error("Webhook endpoint is already armed at {path}")]
    AlreadyArmed { path: String },
    #[error("Webhook path must start with '/': {path:?}")]
    InvalidPath { path: String },
}

fn join(failures: &[CallbackFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl WebhookError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::InvalidEvent(_) => StatusCode::BAD_REQUEST,
            WebhookError::InvalidSignature { .. } => StatusCode::UNAUTHORIZED,
            WebhookError::CallbackFailed { .. }
            | WebhookError::AlreadyArmed { .. }
            | WebhookError::InvalidPath { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
