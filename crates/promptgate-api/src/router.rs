//! Route configuration

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the application router.
///
/// ## Routes
/// - POST /chat - moderate a prompt and forward it when allowed
/// - GET /health - basic health check
/// - GET /health/ready - readiness probe (reports active scanner count)
/// - GET /health/live - liveness probe
/// - GET /version - version information
/// - GET /v1/scanners - active scanners in evaluation order
///
/// CORS is permissive, matching the gateway's role as a browser-facing
/// front door; authentication is handled outside this service.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/health", get(handlers::health))
        .route("/health/ready", get(handlers::ready))
        .route("/health/live", get(handlers::live))
        .route("/version", get(handlers::version))
        .route("/v1/scanners", get(handlers::list_scanners))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
