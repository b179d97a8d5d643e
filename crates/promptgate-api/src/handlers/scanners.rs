//! Scanner listing probe.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::models::ScannerListResponse;
use crate::state::AppState;

/// GET /v1/scanners - names of the scanners active in the registry, in
/// evaluation order.
pub async fn list_scanners(State(state): State<AppState>) -> impl IntoResponse {
    let scanners = state
        .pipeline()
        .registry()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(ScannerListResponse { scanners })
}
