//! Ordered, build-once scanner registry.

use crate::error::ScanError;
use crate::scanner::SafetyScanner;

/// An ordered set of scanners, built once at process start and immutable
/// afterwards. Safe for unsynchronized concurrent reads.
///
/// Construction degrades gracefully: a scanner whose constructor fails is
/// logged and omitted, and the registry as a whole never fails to build. A
/// partially-available safety layer is preferred over a service that cannot
/// start; worst case is an empty registry, leaving only the keyword filter.
pub struct ScannerRegistry {
    scanners: Vec<Box<dyn SafetyScanner>>,
}

impl ScannerRegistry {
    /// Registry with no scanners. Layer 2 becomes a no-op.
    pub fn empty() -> Self {
        Self {
            scanners: Vec::new(),
        }
    }

    /// Build from an ordered list of labeled constructor results.
    ///
    /// Evaluation order equals the order given here. Failed constructors are
    /// skipped after logging.
    pub fn build(
        constructors: impl IntoIterator<Item = (&'static str, Result<Box<dyn SafetyScanner>, ScanError>)>,
    ) -> Self {
        let mut scanners = Vec::new();
        for (label, result) in constructors {
            match result {
                Ok(scanner) => scanners.push(scanner),
                Err(err) => {
                    tracing::error!(scanner = label, error = %err, "failed to initialize scanner, omitting");
                }
            }
        }
        Self { scanners }
    }

    /// Iterate scanners in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn SafetyScanner> {
        self.scanners.iter().map(|s| s.as_ref())
    }

    /// Names of the active scanners, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.scanners.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.scanners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scanners.is_empty()
    }
}
