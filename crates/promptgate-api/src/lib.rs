//! # PromptGate API
//!
//! The HTTP surface of the PromptGate request-moderation gateway.
//!
//! Request flow for `POST /chat`:
//!
//! 1. The moderation pipeline ([`promptgate_core::ModerationPipeline`])
//!    evaluates the prompt: keyword filter first, then the scanner registry.
//! 2. A blocked prompt is answered immediately with the refusal text; the
//!    backend is never contacted.
//! 3. An allowed prompt is forwarded verbatim to the downstream chat backend
//!    by [`forwarder::BackendForwarder`], and the backend's outcome (success
//!    body, upstream status, or transport failure) is relayed to the caller
//!    through the [`error::ApiError`] mapping.

pub mod config;
pub mod error;
pub mod forwarder;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;

pub use config::AppConfig;
pub use error::ApiError;
pub use forwarder::{BackendForwarder, ForwardError};
pub use router::create_router;
pub use state::AppState;
