//! Scanner error types for the moderation pipeline.

/// Scanner-internal failure.
///
/// Distinct from an unsafe verdict: a `ScanError` means the scanner could not
/// reach a conclusion, and the pipeline skips it for the current request. It
/// never escalates to a block and never aborts evaluation.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A model or pattern artifact could not be loaded at construction time.
    #[error("model load failed: {0}")]
    ModelLoad(String),

    /// A detection pattern failed to compile.
    #[error("pattern compilation failed: {0}")]
    PatternCompile(String),

    /// The scanner failed while classifying a prompt.
    #[error("inference failed: {0}")]
    Inference(String),

    /// The prompt could not be processed by this scanner.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
