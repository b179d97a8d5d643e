//! Single-attempt forwarder to the downstream chat backend.
//!
//! One HTTP call per allowed request, bounded by the configured timeout. No
//! retry: chat completions are not idempotent, so a timeout or connection
//! failure is surfaced to the caller rather than silently re-issued.

use promptgate_core::BackendRequest;
use std::time::Duration;

/// Route appended to the configured backend base address.
pub const BACKEND_CHAT_ROUTE: &str = "/v1/chat";

/// Failure modes of a backend call.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    /// The backend answered with a non-success status. Status and body are
    /// relayed to the caller verbatim.
    #[error("backend returned status {status}")]
    Upstream { status: u16, body: String },

    /// The backend could not be reached, timed out, or returned a success
    /// status with a body that is not valid JSON.
    #[error("{0}")]
    Transport(String),
}

/// HTTP client for the downstream chat backend.
pub struct BackendForwarder {
    client: reqwest::Client,
    chat_url: String,
}

impl BackendForwarder {
    /// Client bound to `<base_url>/v1/chat` with the given per-call timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ForwardError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ForwardError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            chat_url: format!("{}{}", base_url.trim_end_matches('/'), BACKEND_CHAT_ROUTE),
        })
    }

    /// Forward an allowed request and map the outcome.
    ///
    /// - 2xx with parseable JSON: the body, verbatim.
    /// - non-2xx: [`ForwardError::Upstream`] with the backend's status and raw text.
    /// - connect/DNS/timeout or malformed success body: [`ForwardError::Transport`].
    pub async fn forward(
        &self,
        request: &BackendRequest,
    ) -> Result<serde_json::Value, ForwardError> {
        let response = self
            .client
            .post(&self.chat_url)
            .json(request)
            .send()
            .await
            .map_err(|e| ForwardError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::info!(status = status.as_u16(), "backend response received");

        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| ForwardError::Transport(e.to_string()))?;
            tracing::error!(status = status.as_u16(), body = %body, "backend returned error status");
            return Err(ForwardError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ForwardError::Transport(format!("invalid JSON from backend: {e}")))
    }
}
