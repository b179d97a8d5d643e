//! # PromptGate Core
//!
//! The layered moderation pipeline behind the PromptGate request gateway.
//!
//! ## Overview
//!
//! Every inbound prompt passes through two layers, in strict order:
//!
//! - **Keyword filter**: deterministic, synchronous substring rejection over a
//!   static disallowed-term list. Runs first because it is cheap.
//! - **Safety scanners**: an ordered registry of pluggable [`SafetyScanner`]
//!   implementations, each classifying the prompt independently. The first
//!   scanner to report invalid wins; a scanner failure is logged and skipped.
//!
//! The result is a single [`Verdict`] per prompt: `Allowed`, or `Blocked`
//! with the rendered refusal text and the layer that triggered it.
//!
//! ## Quick Start
//!
//! ```rust
//! use promptgate_core::{
//!     KeywordFilter, ModerationPipeline, ScannerRegistry, Verdict, DEFAULT_REFUSAL,
//! };
//!
//! let pipeline = ModerationPipeline::new(KeywordFilter::new(), ScannerRegistry::empty());
//!
//! match pipeline.evaluate("What is the capital of France?", DEFAULT_REFUSAL) {
//!     Verdict::Allowed => println!("forward to backend"),
//!     Verdict::Blocked { reason, layer } => println!("refuse ({layer}): {reason}"),
//! }
//! ```
//!
//! ## Scanner failure policy
//!
//! A [`ScanError`] never escalates to a block and never aborts the pipeline:
//! the failing scanner is skipped for that request and evaluation continues.
//! The registry applies the same policy at startup, omitting scanners whose
//! constructors fail rather than refusing to start.

pub mod error;
pub mod keyword;
pub mod message;
pub mod pipeline;
pub mod registry;
pub mod scanner;

// Primary exports
pub use error::ScanError;
pub use keyword::KeywordFilter;
pub use message::{BackendRequest, ChatMessage, Role};
pub use pipeline::{
    BlockLayer, ModerationPipeline, ModerationPipelineBuilder, Verdict, DEFAULT_REFUSAL,
};
pub use registry::ScannerRegistry;
pub use scanner::{SafetyScanner, ScanOutcome};
