//! ModerationPipeline - the layered verdict engine.
//!
//! Strict short-circuit order: keyword filter first, then scanners in
//! registration order. The first layer to reject wins; there is no
//! aggregation of risk scores across scanners.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::keyword::KeywordFilter;
use crate::registry::ScannerRegistry;

/// Refusal text used when the caller does not supply an override.
pub const DEFAULT_REFUSAL: &str = "The prompt contains content that is not allowed. \
I cannot assist with topics related to restricted content.";

/// Which layer produced a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockLayer {
    KeywordFilter,
    Scanner(String),
}

impl fmt::Display for BlockLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeywordFilter => write!(f, "keyword_filter"),
            Self::Scanner(name) => write!(f, "scanner:{name}"),
        }
    }
}

/// The pipeline's decision for one prompt. Created exactly once per request,
/// consumed by the request handler, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Allowed,
    Blocked {
        /// Rendered refusal text, annotated with the scanner name when a
        /// scanner triggered the block.
        reason: String,
        layer: BlockLayer,
    },
}

impl Verdict {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Orchestrates the keyword filter and the scanner registry into a single
/// verdict per prompt.
pub struct ModerationPipeline {
    filter: KeywordFilter,
    registry: ScannerRegistry,
}

impl ModerationPipeline {
    /// Pipeline over the given filter and registry.
    pub fn new(filter: KeywordFilter, registry: ScannerRegistry) -> Self {
        Self { filter, registry }
    }

    /// Create a builder for custom pipeline configuration.
    pub fn builder() -> ModerationPipelineBuilder {
        ModerationPipelineBuilder::new()
    }

    /// The scanner registry this pipeline consults.
    pub fn registry(&self) -> &ScannerRegistry {
        &self.registry
    }

    /// Evaluate a prompt against both layers.
    ///
    /// `refusal` is the effective refusal text (caller override or
    /// [`DEFAULT_REFUSAL`]) and becomes the blocked reason verbatim for a
    /// keyword hit, or annotated with the scanner name for a scanner hit.
    ///
    /// An empty prompt passes through both layers like any other; a scanner
    /// failure is logged and skipped without recording a vote either way.
    pub fn evaluate(&self, prompt: &str, refusal: &str) -> Verdict {
        if self.filter.is_harmful(prompt) {
            tracing::warn!("prompt blocked by keyword filter");
            return Verdict::Blocked {
                reason: refusal.to_string(),
                layer: BlockLayer::KeywordFilter,
            };
        }

        for scanner in self.registry.iter() {
            // A panicking implementation violates the SafetyScanner contract;
            // contain it here so one bad scanner cannot abort the request.
            let scanned = panic::catch_unwind(AssertUnwindSafe(|| scanner.scan(prompt)));

            let outcome = match scanned {
                Ok(Ok(outcome)) => outcome,
                Ok(Err(err)) => {
                    tracing::error!(scanner = scanner.name(), error = %err, "scanner failed, skipping");
                    continue;
                }
                Err(_) => {
                    tracing::error!(scanner = scanner.name(), "scanner panicked, skipping");
                    continue;
                }
            };

            if !outcome.is_valid {
                tracing::warn!(
                    scanner = %outcome.scanner_name,
                    risk_score = outcome.risk_score,
                    "prompt blocked by scanner"
                );
                return Verdict::Blocked {
                    reason: format!("{refusal} ({})", outcome.scanner_name),
                    layer: BlockLayer::Scanner(outcome.scanner_name),
                };
            }
        }

        Verdict::Allowed
    }
}

/// Builder for custom pipeline configurations.
pub struct ModerationPipelineBuilder {
    filter: Option<KeywordFilter>,
    registry: Option<ScannerRegistry>,
}

impl ModerationPipelineBuilder {
    fn new() -> Self {
        Self {
            filter: None,
            registry: None,
        }
    }

    /// Replace the default keyword filter.
    pub fn with_keyword_filter(mut self, filter: KeywordFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the scanner registry.
    pub fn with_registry(mut self, registry: ScannerRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the pipeline. Defaults: built-in keyword filter, empty registry.
    pub fn build(self) -> ModerationPipeline {
        ModerationPipeline {
            filter: self.filter.unwrap_or_default(),
            registry: self.registry.unwrap_or_else(ScannerRegistry::empty),
        }
    }
}
