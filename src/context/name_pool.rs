//! Fixed replacement-name pools.
//!
//! Names are drawn as `words[index % len]`, with `_<index / len>` appended
//! once the pool wraps. Distinct indices therefore always yield distinct
//! names, which is what keeps every [`RenameTable`](super::RenameTable)
//! injective.

/// An ordered, immutable list of replacement words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamePool {
    label: &'static str,
    words: &'static [&'static str],
}

/// Nouns handed out to obfuscated variables.
pub const IDENTIFIER_NAMES: NamePool = NamePool::new(
    "identifiers",
    &[
        "player",
        "game",
        "character",
        "position",
        "velocity",
        "health",
        "score",
        "level",
        "weapon",
        "item",
        "inventory",
        "skill",
        "experience",
        "gold",
        "magic",
        "spell",
        "ability",
        "status",
        "effect",
        "timer",
        "counter",
        "flag",
        "state",
        "mode",
        "config",
        "setting",
        "option",
        "value",
        "result",
        "output",
        "input",
        "data",
        "info",
        "message",
        "text",
        "string",
        "number",
        "boolean",
        "table",
        "array",
        "list",
        "queue",
    ],
);

/// Verbs handed out to obfuscated function declarations.
pub const FUNCTION_NAMES: NamePool = NamePool::new(
    "functions",
    &[
        "initialize",
        "update",
        "render",
        "process",
        "handle",
        "execute",
        "perform",
        "calculate",
        "validate",
        "transform",
    ],
);

impl NamePool {
    pub const fn new(label: &'static str, words: &'static [&'static str]) -> Self {
        Self { label, words }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Replacement name for the `index`-th assignment.
    ///
    /// An empty pool falls back to a bare `<label>_<index>` name so the
    /// operation stays total.
    pub fn name_at(&self, index: usize) -> String {
        if self.words.is_empty() {
            return format!("{}_{}", self.label, index);
        }

        let base = self.words[index % self.words.len()];
        let suffix = index / self.words.len();
        if suffix > 0 {
            format!("{base}_{suffix}")
        } else {
            base.to_string()
        }
    }
}
