//! Final cosmetic pass: blank lines, outer whitespace, operator spacing.
//!
//! Operators are normalized by independent substitutions in a fixed order,
//! one pass each. A later operator's rule may re-touch spacing produced by
//! an earlier one (`x = -1` comes out as `x = - 1`).

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

static OPERATOR_SPACING: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // comparisons stay whole so `==` never becomes `=  =`
        r"\s*(==|~=|<=|>=|!=|=)\s*",
        r"\s*(\+)\s*",
        r"\s*(-)\s*",
        r"\s*(\*)\s*",
        r"\s*(/)\s*",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

pub fn final_format(code: &str) -> String {
    let code = BLANK_LINE_RUN.replace_all(code, "\n\n");
    let code = code.trim().to_string();

    OPERATOR_SPACING.iter().fold(code, |text, operator| {
        operator.replace_all(&text, " ${1} ").into_owned()
    })
}
