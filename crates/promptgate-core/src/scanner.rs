//! The `SafetyScanner` capability and its outcome type.

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Per-scanner classification result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Name of the scanner that produced this outcome.
    pub scanner_name: String,
    /// Whether the prompt is acceptable according to this scanner.
    pub is_valid: bool,
    /// Risk estimate in `[0.0, 1.0]`.
    pub risk_score: f64,
}

impl ScanOutcome {
    /// Outcome for a prompt this scanner considers acceptable.
    pub fn valid(scanner_name: impl Into<String>, risk_score: f64) -> Self {
        Self {
            scanner_name: scanner_name.into(),
            is_valid: true,
            risk_score,
        }
    }

    /// Outcome for a prompt this scanner considers unsafe.
    pub fn invalid(scanner_name: impl Into<String>, risk_score: f64) -> Self {
        Self {
            scanner_name: scanner_name.into(),
            is_valid: false,
            risk_score,
        }
    }
}

/// A pluggable content-safety check.
///
/// The pipeline treats every implementation uniformly through this contract;
/// it never branches on the concrete type, only reads the name for
/// diagnostics and refusal annotation.
///
/// ## Contract
/// - `scan` must surface internal failures as [`ScanError`] rather than
///   panicking; the pipeline treats a failure as "skip this scanner", never
///   as a block.
/// - `scan` is called concurrently from many in-flight requests and must not
///   rely on interior mutability without synchronization. Implementations
///   built by the registry hold no mutable state after construction.
/// - `scan` is synchronous and expected to be CPU-bound. An implementation
///   that performs blocking I/O must offload it internally so it cannot stall
///   the request scheduler.
pub trait SafetyScanner: Send + Sync {
    /// Scanner name used in logs and blocked-response annotation.
    fn name(&self) -> &str;

    /// Classify a prompt.
    fn scan(&self, prompt: &str) -> Result<ScanOutcome, ScanError>;
}
