//! Escape-sequence decoding and literal concatenation folding.

use crate::context::DeobfuscationContext;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HEX_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\x([0-9A-Fa-f]{2})").unwrap());
static NUMERIC_ESCAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\([0-9]{1,3})").unwrap());
static ADJACENT_LITERALS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*?)"\s*\.\.\s*"([^"]*?)""#).unwrap());

/// Printable ASCII range accepted by the numeric decoder.
const PRINTABLE: std::ops::RangeInclusive<u32> = 32..=126;

/// Runs hex decoding, numeric decoding and one concatenation fold.
pub fn decode_strings(code: &str, ctx: &mut DeobfuscationContext) -> String {
    let code = decode_hex_escapes(code, ctx);
    let code = decode_numeric_escapes(&code, ctx);
    fold_adjacent_literals(&code)
}

/// `\xHH` becomes its character only when that character is an ASCII
/// letter, digit or space. Nothing is recorded in the decode table.
pub fn decode_hex_escapes(code: &str, ctx: &mut DeobfuscationContext) -> String {
    let mut refused = Vec::new();
    let decoded = HEX_ESCAPE.replace_all(code, |caps: &Captures| {
        let escape = &caps[0];
        match u8::from_str_radix(&caps[1], 16).map(char::from) {
            Ok(ch) if ch.is_ascii_alphanumeric() || ch == ' ' => ch.to_string(),
            _ => {
                refused.push(escape.to_string());
                escape.to_string()
            }
        }
    });
    let decoded = decoded.into_owned();

    if ctx.options.report_undecoded {
        for escape in refused {
            ctx.warn(format!("Left hex escape {escape} undecoded (not a letter, digit or space)"));
        }
    }
    decoded
}

/// `\N`, `\NN` or `\NNN` in the printable range becomes its character and
/// is recorded in the decode table.
pub fn decode_numeric_escapes(code: &str, ctx: &mut DeobfuscationContext) -> String {
    let mut refused = Vec::new();
    let decoded = NUMERIC_ESCAPE.replace_all(code, |caps: &Captures| {
        let escape = &caps[0];
        let printable = caps[1]
            .parse::<u32>()
            .ok()
            .filter(|code_point| PRINTABLE.contains(code_point))
            .and_then(char::from_u32);
        match printable {
            Some(ch) => {
                ctx.decoded_strings.record(escape, ch);
                ch.to_string()
            }
            None => {
                refused.push(escape.to_string());
                escape.to_string()
            }
        }
    });
    let decoded = decoded.into_owned();

    if ctx.options.report_undecoded {
        for escape in refused {
            ctx.warn(format!("Left numeric escape {escape} undecoded (outside printable ASCII)"));
        }
    }
    decoded
}

/// Merges `"A" .. "B"` into `"AB"`. Chains of three or more literals are
/// only partly folded since matches do not overlap.
pub fn fold_adjacent_literals(code: &str) -> String {
    ADJACENT_LITERALS
        .replace_all(code, "\"${1}${2}\"")
        .into_owned()
}
