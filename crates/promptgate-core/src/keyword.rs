//! Layer-1 keyword filter.
//!
//! Cheap, deterministic substring rejection that runs before any scanner so
//! trivially blockable input never pays scanner cost.

use unicode_normalization::UnicodeNormalization;

/// Built-in disallowed terms. All entries are lowercase; matching is
/// case-insensitive substring over NFKC-normalized text.
const DISALLOWED_TERMS: &[&str] = &[
    "how to make a bomb",
    "build a pipe bomb",
    "make explosives at home",
    "synthesize methamphetamine",
    "cook meth",
    "buy illegal drugs",
    "credit card skimmer",
    "stolen credit card numbers",
    "steal someone's password",
    "bypass parental controls",
    "child exploitation",
    "hire a hitman",
    "untraceable poison",
    "ransomware payload",
];

/// Static, synchronous first line of defense.
///
/// `is_harmful` never fails; absence of a match is the only negative signal.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    terms: Vec<String>,
}

impl KeywordFilter {
    /// Filter over the built-in term list.
    pub fn new() -> Self {
        Self::with_terms(DISALLOWED_TERMS.iter().map(|t| t.to_string()))
    }

    /// Filter over a caller-supplied term list. Terms are normalized the same
    /// way scanned text is, so matching stays symmetric.
    pub fn with_terms(terms: impl IntoIterator<Item = String>) -> Self {
        Self {
            terms: terms.into_iter().map(|t| normalize(&t)).collect(),
        }
    }

    /// True if the prompt contains any disallowed term.
    pub fn is_harmful(&self, prompt: &str) -> bool {
        let haystack = normalize(prompt);
        self.terms.iter().any(|term| haystack.contains(term.as_str()))
    }

    /// Number of terms in the filter.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// NFKC-fold then lowercase, so full-width and compatibility spellings cannot
/// slip past a plain `contains`.
fn normalize(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}
