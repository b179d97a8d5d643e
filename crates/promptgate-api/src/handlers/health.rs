//! Health and version probes.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::models::{HealthResponse, ReadyResponse, VersionResponse};
use crate::state::AppState;

/// GET /health - basic health check.
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// GET /health/live - liveness probe.
pub async fn live() -> impl IntoResponse {
    Json(HealthResponse { status: "alive" })
}

/// GET /health/ready - readiness probe.
///
/// Always ready once the server is up (a degraded or empty registry is a
/// deliberate startup outcome, not an error), but the scanner count is
/// reported so operators can see degradation.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    Json(ReadyResponse {
        status: "ready",
        scanners: state.pipeline().registry().len(),
    })
}

/// GET /version - version information.
pub async fn version() -> impl IntoResponse {
    Json(VersionResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
