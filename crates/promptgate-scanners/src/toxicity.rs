//! Toxicity scanner backed by a weighted term lexicon.

use promptgate_core::{SafetyScanner, ScanError, ScanOutcome};
use unicode_normalization::UnicodeNormalization;

/// Scanner name, used in logs and in blocked-response annotation.
pub const NAME: &str = "Toxicity";

/// Risk at or above which a prompt is reported invalid.
const BLOCK_THRESHOLD: f64 = 0.5;

/// Weighted lexicon entries: (term, weight). Terms are lowercase; weights
/// accumulate across distinct matches and the total is capped at 1.0, so a
/// single high-weight slur blocks on its own while milder terms only block
/// in combination.
const LEXICON: &[(&str, f64)] = &[
    ("kill yourself", 0.9),
    ("go die", 0.8),
    ("i will hurt you", 0.8),
    ("nobody loves you", 0.6),
    ("worthless piece of", 0.6),
    ("you are pathetic", 0.45),
    ("i hate you", 0.4),
    ("shut up", 0.3),
    ("idiot", 0.3),
    ("moron", 0.3),
    ("stupid", 0.25),
    ("loser", 0.25),
    ("dumb", 0.2),
];

/// Scores a prompt for abusive or harassing content.
pub struct Toxicity {
    lexicon: &'static [(&'static str, f64)],
}

impl Toxicity {
    pub fn new() -> Result<Self, ScanError> {
        Ok(Self { lexicon: LEXICON })
    }

    /// Labeled boxed constructor result, in the shape the registry builder
    /// consumes.
    pub fn constructor() -> (&'static str, Result<Box<dyn SafetyScanner>, ScanError>) {
        (NAME, Self::new().map(|s| Box::new(s) as Box<dyn SafetyScanner>))
    }
}

impl SafetyScanner for Toxicity {
    fn name(&self) -> &str {
        NAME
    }

    fn scan(&self, prompt: &str) -> Result<ScanOutcome, ScanError> {
        let haystack: String = prompt.nfkc().collect::<String>().to_lowercase();

        let mut risk: f64 = 0.0;
        for (term, weight) in self.lexicon {
            if haystack.contains(term) {
                tracing::debug!(term, weight, "toxic term matched");
                risk += weight;
            }
        }
        let risk = risk.min(1.0);

        if risk >= BLOCK_THRESHOLD {
            Ok(ScanOutcome::invalid(NAME, risk))
        } else {
            Ok(ScanOutcome::valid(NAME, risk))
        }
    }
}
