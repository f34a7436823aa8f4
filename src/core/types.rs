use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse size/volume bucket for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComplexityClass {
    Low,
    Medium,
    High,
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexityClass::Low => write!(f, "Low"),
            ComplexityClass::Medium => write!(f, "Medium"),
            ComplexityClass::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    #[serde(rename = "originalLines")]
    pub original_line_count: usize,
    #[serde(rename = "deobfuscatedLines")]
    pub final_line_count: usize,
    #[serde(rename = "variablesRenamed")]
    pub identifiers_renamed: usize,
    pub strings_decoded: usize,
    #[serde(rename = "functionsAnalyzed")]
    pub functions_renamed: usize,
    #[serde(rename = "complexity")]
    pub complexity_class: ComplexityClass,
    /// Heuristic thoroughness estimate, always within 40..=95.
    #[serde(rename = "confidence")]
    pub confidence_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeobfuscationResult {
    pub deobfuscated_code: String,
    pub statistics: Statistics,
    pub warnings: Vec<String>,
}
