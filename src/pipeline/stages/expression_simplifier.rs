//! Textual algebraic and boolean identities.
//!
//! One call applies every identity once, in order. Nested redundancies such
//! as `(0 + 5) + 0` may survive a single pass; [`simplify_to_fixed_point`]
//! keeps going until nothing changes.

use crate::context::DeobfuscationContext;
use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound for fixed-point mode. Every identity shortens the buffer, so
/// this is only reached on very long redundancy chains.
pub const MAX_SIMPLIFY_PASSES: usize = 64;

static IDENTITIES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // n + 0, 0 + n, n * 1, 1 * n
        (r"([0-9]+)\s*\+\s*0\b", "${1}"),
        (r"\b0\s*\+\s*([0-9]+)", "${1}"),
        (r"([0-9]+)\s*\*\s*1\b", "${1}"),
        (r"\b1\s*\*\s*([0-9]+)", "${1}"),
        // true and X, X and true, false or X, X or false
        (r"\btrue\s+and\s+(.+)", "${1}"),
        (r"(.+)\s+and\s+true\b", "${1}"),
        (r"\bfalse\s+or\s+(.+)", "${1}"),
        (r"(.+)\s+or\s+false\b", "${1}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Applies each identity exactly once.
pub fn simplify_once(code: &str) -> String {
    IDENTITIES
        .iter()
        .fold(code.to_string(), |text, (pattern, replacement)| {
            pattern.replace_all(&text, *replacement).into_owned()
        })
}

/// Repeats [`simplify_once`] until the buffer is stable or
/// [`MAX_SIMPLIFY_PASSES`] is reached.
pub fn simplify_to_fixed_point(code: &str) -> String {
    let mut current = code.to_string();
    for pass in 1..=MAX_SIMPLIFY_PASSES {
        let next = simplify_once(&current);
        if next == current {
            tracing::trace!(passes = pass, "simplifier reached fixed point");
            return next;
        }
        current = next;
    }
    tracing::debug!(
        "simplifier stopped after {} passes without converging",
        MAX_SIMPLIFY_PASSES
    );
    current
}

pub fn simplify_expressions(code: &str, ctx: &mut DeobfuscationContext) -> String {
    if ctx.options.fixed_point_simplify {
        simplify_to_fixed_point(code)
    } else {
        simplify_once(code)
    }
}
