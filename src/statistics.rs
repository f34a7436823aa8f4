//! Counts, complexity class and confidence score for one invocation.

use crate::context::DeobfuscationContext;
use crate::core::{ComplexityClass, Statistics};

const CONFIDENCE_BASE: usize = 40;
const CONFIDENCE_CAP: usize = 95;
const IDENTIFIER_WEIGHT: usize = 2;
const STRING_WEIGHT: usize = 3;
const FUNCTION_WEIGHT: usize = 5;

/// Line/rename thresholds above which a script counts as Medium or High.
const HIGH_LINES: usize = 200;
const HIGH_RENAMES: usize = 50;
const MEDIUM_LINES: usize = 50;
const MEDIUM_RENAMES: usize = 20;

/// Pure function of the original input, the final buffer and the tables.
pub fn collect_statistics(original: &str, output: &str, ctx: &DeobfuscationContext) -> Statistics {
    let original_line_count = count_lines(original);
    let identifiers_renamed = ctx.identifiers.len();
    let strings_decoded = ctx.decoded_strings.len();
    let functions_renamed = ctx.functions.len();

    Statistics {
        original_line_count,
        final_line_count: count_lines(output),
        identifiers_renamed,
        strings_decoded,
        functions_renamed,
        complexity_class: classify_complexity(original_line_count, identifiers_renamed),
        confidence_score: confidence_score(identifiers_renamed, strings_decoded, functions_renamed),
    }
}

/// Number of `\n`-separated segments; empty text counts as one line.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

pub fn classify_complexity(original_lines: usize, identifiers_renamed: usize) -> ComplexityClass {
    if original_lines > HIGH_LINES || identifiers_renamed > HIGH_RENAMES {
        ComplexityClass::High
    } else if original_lines > MEDIUM_LINES || identifiers_renamed > MEDIUM_RENAMES {
        ComplexityClass::Medium
    } else {
        ComplexityClass::Low
    }
}

/// `min(95, 40 + 2i + 3s + 5f)`
pub fn confidence_score(identifiers: usize, strings: usize, functions: usize) -> u8 {
    let weighted = identifiers
        .saturating_mul(IDENTIFIER_WEIGHT)
        .saturating_add(strings.saturating_mul(STRING_WEIGHT))
        .saturating_add(functions.saturating_mul(FUNCTION_WEIGHT));
    CONFIDENCE_BASE.saturating_add(weighted).min(CONFIDENCE_CAP) as u8
}
