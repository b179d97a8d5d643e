//! # PromptGate Scanners
//!
//! Built-in [`SafetyScanner`](promptgate_core::SafetyScanner) implementations:
//!
//! - [`PromptInjection`]: regex-catalogue detector for instruction-override,
//!   role-hijack, delimiter-escape, and exfiltration attempts.
//! - [`Toxicity`]: weighted-lexicon scorer for abusive content.
//!
//! [`default_registry`] wires both into a
//! [`ScannerRegistry`](promptgate_core::ScannerRegistry) in the order they
//! are consulted by the pipeline: injection first, toxicity second.

pub mod injection;
pub mod patterns;
pub mod toxicity;

pub use injection::PromptInjection;
pub use patterns::{InjectionPattern, PatternCategory, PATTERNS};
pub use toxicity::Toxicity;

use promptgate_core::ScannerRegistry;

/// The standard scanner set, in evaluation order.
///
/// A scanner whose constructor fails is logged and omitted; the registry
/// itself always builds.
pub fn default_registry() -> ScannerRegistry {
    ScannerRegistry::build([PromptInjection::constructor(), Toxicity::constructor()])
}
