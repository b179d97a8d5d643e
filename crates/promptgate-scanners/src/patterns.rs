//! Injection pattern library.
//!
//! Static catalogue of regex patterns used by the prompt-injection scanner.
//! Each entry carries a snake_case name for logs, a [`PatternCategory`] for
//! grouping, a regex string compiled at scanner-construction time, and a
//! severity that becomes the risk score when the pattern matches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad classification of the injection technique a pattern targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternCategory {
    /// Attempts to override or cancel the original system instructions.
    InstructionOverride,
    /// Attempts to redefine the model's persona or role.
    RoleHijack,
    /// Attempts to escape the prompt context via delimiters or special tags.
    DelimiterEscape,
    /// Attempts to exfiltrate the system prompt or other hidden context.
    DataExfiltration,
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InstructionOverride => write!(f, "InstructionOverride"),
            Self::RoleHijack => write!(f, "RoleHijack"),
            Self::DelimiterEscape => write!(f, "DelimiterEscape"),
            Self::DataExfiltration => write!(f, "DataExfiltration"),
        }
    }
}

/// A single detection pattern.
pub struct InjectionPattern {
    /// Short identifier used in logs.
    pub name: &'static str,
    /// The family of injection technique this pattern belongs to.
    pub category: PatternCategory,
    /// Regex string, compiled by [`crate::injection::PromptInjection`].
    pub pattern: &'static str,
    /// Risk assigned when this pattern matches, in `[0.0, 1.0]`.
    pub severity: f64,
}

/// The built-in pattern library.
///
/// Kept as a static slice so the catalogue costs nothing until the scanner
/// compiles it.
pub static PATTERNS: &[InjectionPattern] = &[
    // ---- Instruction override ------------------------------------------
    InjectionPattern {
        name: "ignore_previous",
        category: PatternCategory::InstructionOverride,
        pattern: r"(?i)ignore\s+(all\s+)?(previous|prior|above)\s+instructions?",
        severity: 0.9,
    },
    InjectionPattern {
        name: "disregard_prior",
        category: PatternCategory::InstructionOverride,
        pattern: r"(?i)disregard\s+(all\s+)?(prior|previous|above|earlier)",
        severity: 0.85,
    },
    InjectionPattern {
        name: "forget_instructions",
        category: PatternCategory::InstructionOverride,
        pattern: r"(?i)forget\s+(everything|all|your)\s+(you|instructions?|rules?)",
        severity: 0.8,
    },
    InjectionPattern {
        name: "new_instruction",
        category: PatternCategory::InstructionOverride,
        pattern: r"(?i)new\s+instructions?\s*:",
        severity: 0.7,
    },
    // ---- Role hijack ----------------------------------------------------
    InjectionPattern {
        name: "you_are_now",
        category: PatternCategory::RoleHijack,
        pattern: r"(?i)you\s+are\s+now\s+(a|an|the)\b",
        severity: 0.7,
    },
    InjectionPattern {
        name: "pretend_to_be",
        category: PatternCategory::RoleHijack,
        pattern: r"(?i)pretend\s+(to\s+be|you\s+are)",
        severity: 0.65,
    },
    InjectionPattern {
        name: "act_without_restrictions",
        category: PatternCategory::RoleHijack,
        pattern: r"(?i)act\s+as\s+.{0,40}without\s+(any\s+)?(restrictions?|limitations?|filters?)",
        severity: 0.9,
    },
    InjectionPattern {
        name: "developer_mode",
        category: PatternCategory::RoleHijack,
        pattern: r"(?i)(developer|dan|jailbreak)\s+mode",
        severity: 0.9,
    },
    // ---- Delimiter escape ------------------------------------------------
    InjectionPattern {
        name: "system_tag",
        category: PatternCategory::DelimiterEscape,
        pattern: r"(?i)</?\s*system\s*>",
        severity: 0.8,
    },
    InjectionPattern {
        name: "inst_tag",
        category: PatternCategory::DelimiterEscape,
        pattern: r"(?i)\[/?INST\]",
        severity: 0.8,
    },
    InjectionPattern {
        name: "im_start_tag",
        category: PatternCategory::DelimiterEscape,
        pattern: r"(?i)<\|im_(start|end)\|>",
        severity: 0.8,
    },
    // ---- Data exfiltration ----------------------------------------------
    InjectionPattern {
        name: "reveal_prompt",
        category: PatternCategory::DataExfiltration,
        pattern: r"(?i)(reveal|show|print|repeat|output)\s+(me\s+)?(your|the)\s+(system\s+)?(prompt|instructions?)",
        severity: 0.85,
    },
    InjectionPattern {
        name: "initial_instructions",
        category: PatternCategory::DataExfiltration,
        pattern: r"(?i)what\s+(are|were)\s+your\s+(initial|original)\s+instructions?",
        severity: 0.75,
    },
];
