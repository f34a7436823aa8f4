//! Per-invocation state threaded through the pipeline.
//!
//! A [`DeobfuscationContext`] is built fresh for every call and dropped
//! when the call returns, so nothing accumulates across inputs and one
//! engine can serve concurrent callers.

pub mod name_pool;
pub mod tables;

pub use name_pool::{NamePool, FUNCTION_NAMES, IDENTIFIER_NAMES};
pub use tables::{DecodedStringTable, RenameTable};

use serde::{Deserialize, Serialize};

/// Knobs that change stage behavior. The defaults reproduce the plain
/// single-pass, warning-free engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Rerun the expression identities until the buffer stops changing.
    pub fixed_point_simplify: bool,
    /// Report escapes the string decoder refused to decode.
    pub report_undecoded: bool,
}

#[derive(Debug, Clone)]
pub struct DeobfuscationContext {
    pub identifiers: RenameTable,
    pub functions: RenameTable,
    pub decoded_strings: DecodedStringTable,
    pub warnings: Vec<String>,
    pub options: EngineOptions,
}

impl DeobfuscationContext {
    pub fn new(options: EngineOptions) -> Self {
        Self {
            identifiers: RenameTable::new(IDENTIFIER_NAMES),
            functions: RenameTable::new(FUNCTION_NAMES),
            decoded_strings: DecodedStringTable::new(),
            warnings: Vec::new(),
            options,
        }
    }

    /// Appends a warning unless an identical one is already present.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.warnings.contains(&message) {
            self.warnings.push(message);
        }
    }
}

impl Default for DeobfuscationContext {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}
