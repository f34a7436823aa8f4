use super::name_pool::NamePool;
use regex::{NoExpand, Regex};
use std::collections::HashMap;

/// Insertion-ordered mapping from an obfuscated token to its replacement.
///
/// The next replacement is always `pool.name_at(len)`, so a token is
/// renamed at most once and no two tokens share a replacement.
#[derive(Debug, Clone)]
pub struct RenameTable {
    pool: NamePool,
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl RenameTable {
    pub fn new(pool: NamePool) -> Self {
        Self {
            pool,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the replacement for `original`, assigning the next pool
    /// name on first sight.
    pub fn assign(&mut self, original: &str) -> &str {
        let position = match self.index.get(original) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                let replacement = self.pool.name_at(position);
                self.entries.push((original.to_string(), replacement));
                self.index.insert(original.to_string(), position);
                position
            }
        };
        &self.entries[position].1
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.index
            .get(original)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pool(&self) -> NamePool {
        self.pool
    }

    /// Entries in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(original, replacement)| (original.as_str(), replacement.as_str()))
    }

    /// Rewrites every whole-token occurrence of each original, one entry at
    /// a time in assignment order.
    pub fn apply(&self, buffer: &str) -> String {
        self.entries
            .iter()
            .fold(buffer.to_string(), |text, (original, replacement)| {
                match Regex::new(&format!(r"\b{}\b", regex::escape(original))) {
                    Ok(token) => token
                        .replace_all(&text, NoExpand(replacement))
                        .into_owned(),
                    Err(e) => {
                        tracing::warn!("Skipping rename of {original:?}: {e}");
                        text
                    }
                }
            })
    }
}

/// Escape sequences resolved by the numeric-escape decoder, keyed by the
/// exact escape text.
#[derive(Debug, Clone, Default)]
pub struct DecodedStringTable {
    entries: Vec<(String, char)>,
    index: HashMap<String, usize>,
}

impl DecodedStringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a decoded escape. Repeated escapes keep their first entry.
    pub fn record(&mut self, escape: &str, decoded: char) {
        if self.index.contains_key(escape) {
            return;
        }
        self.index.insert(escape.to_string(), self.entries.len());
        self.entries.push((escape.to_string(), decoded));
    }

    pub fn get(&self, escape: &str) -> Option<char> {
        self.index.get(escape).map(|&position| self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, char)> {
        self.entries
            .iter()
            .map(|(escape, decoded)| (escape.as_str(), *decoded))
    }
}
