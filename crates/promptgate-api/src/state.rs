//! Shared application state.

use promptgate_core::ModerationPipeline;
use std::sync::Arc;

use crate::forwarder::BackendForwarder;

/// Read-only state handed to every request task.
///
/// Built once at startup; nothing inside mutates afterwards, so concurrent
/// reads need no synchronization beyond the `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

struct StateInner {
    pipeline: ModerationPipeline,
    forwarder: BackendForwarder,
}

impl AppState {
    pub fn new(pipeline: ModerationPipeline, forwarder: BackendForwarder) -> Self {
        Self {
            inner: Arc::new(StateInner {
                pipeline,
                forwarder,
            }),
        }
    }

    pub fn pipeline(&self) -> &ModerationPipeline {
        &self.inner.pipeline
    }

    pub fn forwarder(&self) -> &BackendForwarder {
        &self.inner.forwarder
    }
}
