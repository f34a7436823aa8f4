//! Renames obfuscated-looking variable tokens.
//!
//! Each detector is run over the unchanged buffer in a fixed order and its
//! distinct matches are assigned names in first-seen order. Substitution
//! happens once, after every detector has run.

use crate::context::DeobfuscationContext;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Lexical shapes of generated identifiers, in assignment order.
static OBFUSCATED_IDENTIFIERS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        // letter + 6 or more hex digits: x9f3a2b
        ("hex_run", r"\b[a-zA-Z][0-9a-fA-F]{6,}\b"),
        // letter + 3 or more decimal digits: a123456
        ("numbered", r"\b[a-zA-Z][0-9]{3,}\b"),
        // short prefix, underscore, hex: ab_1f
        ("prefixed_hex", r"\b[a-zA-Z]{1,2}_[0-9a-fA-F]+\b"),
        ("var_prefix", r"\bvar_[0-9a-fA-F]+\b"),
        // letter/digit pairs: a1b2c3, k1x5z8l
        ("alternating", r"\b(?:[a-zA-Z][0-9]){3,}[a-zA-Z]?\b"),
    ]
    .into_iter()
    .map(|(label, pattern)| (label, Regex::new(pattern).unwrap()))
    .collect()
});

pub fn rename_identifiers(code: &str, ctx: &mut DeobfuscationContext) -> String {
    for (label, pattern) in OBFUSCATED_IDENTIFIERS.iter() {
        let before = ctx.identifiers.len();
        for token in distinct_matches(pattern, code) {
            ctx.identifiers.assign(token);
        }
        tracing::trace!(
            detector = label,
            assigned = ctx.identifiers.len() - before,
            "identifier detector finished"
        );
    }

    ctx.identifiers.apply(code)
}

fn distinct_matches<'a>(pattern: &Regex, code: &'a str) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    pattern
        .find_iter(code)
        .map(|m| m.as_str())
        .filter(|token| seen.insert(*token))
        .collect()
}
