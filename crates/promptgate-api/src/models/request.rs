//! Inbound request DTOs.

use promptgate_core::ChatMessage;
use serde::Deserialize;
use validator::Validate;

/// Body of `POST /chat`.
///
/// An empty prompt is accepted and evaluated like any other; the pipeline has
/// no special-case skip for it.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChatRequest {
    /// The prompt to moderate and, if allowed, forward.
    pub prompt: String,

    /// Optional override for the refusal text used when the prompt is
    /// blocked. Oversized overrides are rejected, not truncated.
    #[validate(length(
        max = 2048,
        message = "refusal_message must be at most 2048 characters"
    ))]
    pub refusal_message: Option<String>,

    /// Optional conversation history, forwarded to the backend untouched.
    pub messages: Option<Vec<ChatMessage>>,
}
