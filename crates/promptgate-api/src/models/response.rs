//! Outbound response DTOs.

use serde::{Deserialize, Serialize};

/// Body returned for a blocked prompt. This is a normal 200 response, not an
/// error: the caller gets the refusal as the assistant's reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefusalResponse {
    pub response: String,
}

/// Basic health probe body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Readiness probe body; reports the active scanner count so a degraded
/// registry is visible to operators.
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub scanners: usize,
}

/// Version probe body.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub name: &'static str,
    pub version: &'static str,
}

/// Body of `GET /v1/scanners`.
#[derive(Debug, Serialize)]
pub struct ScannerListResponse {
    pub scanners: Vec<String>,
}
