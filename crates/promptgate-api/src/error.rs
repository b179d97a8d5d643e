//! Outermost error taxonomy and its HTTP mapping.
//!
//! Every failure below the handlers converts to an [`ApiError`] before
//! crossing the response boundary; no inner error type reaches the caller
//! untranslated. A blocked prompt is deliberately NOT represented here: a
//! policy rejection is an expected outcome and is rendered as a normal
//! response by the chat handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::forwarder::ForwardError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request payload failed validation.
    #[error("{0}")]
    Validation(String),

    /// Backend answered with a non-success status; relayed verbatim.
    #[error("backend returned status {status}")]
    Upstream { status: u16, body: String },

    /// Backend unreachable, timed out, or broke the response contract.
    #[error("{0}")]
    Transport(String),

    /// Unexpected internal failure, caught at the boundary.
    #[error("{0}")]
    Internal(String),
}

impl From<ForwardError> for ApiError {
    fn from(err: ForwardError) -> Self {
        match err {
            ForwardError::Upstream { status, body } => Self::Upstream { status, body },
            ForwardError::Transport(message) => Self::Transport(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": message })),
            )
                .into_response(),
            Self::Upstream { status, body } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (status, body).into_response()
            }
            Self::Transport(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": format!("Request error: {message}") })),
            )
                .into_response(),
            Self::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": message })),
            )
                .into_response(),
        }
    }
}
