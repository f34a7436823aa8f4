//! Line-structure pre-pass.
//!
//! Collapses the source to one line, breaks it after statement terminators,
//! braces and list commas, then re-indents by brace depth. This is a
//! cosmetic pass over lines, not a parser.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

const INDENT_UNIT: &str = "  ";

pub fn format_code(code: &str) -> String {
    let flat = WHITESPACE_RUN.replace_all(code, " ");
    let broken = break_lines(&flat);
    let indented = reindent(&broken);
    BLANK_LINE_RUN.replace_all(&indented, "\n\n").into_owned()
}

/// Inserts the line breaks: after `;` and `{`, around `}`, and after any
/// comma that does not close out a `}`/`]` list.
fn break_lines(code: &str) -> String {
    let code = code
        .replace(';', ";\n")
        .replace('{', "{\n")
        .replace('}', "\n}\n");

    let mut out = String::with_capacity(code.len() + code.len() / 8);
    for (i, ch) in code.char_indices() {
        out.push(ch);
        if ch == ',' && !closes_list(&code[i + 1..]) {
            out.push('\n');
        }
    }
    out
}

fn closes_list(rest: &str) -> bool {
    matches!(rest.trim_start().chars().next(), Some('}' | ']'))
}

/// Two spaces per brace level. A closing brace dedents its own line; an
/// opening brace indents the lines after it.
fn reindent(code: &str) -> String {
    let mut depth: usize = 0;
    code.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return String::new();
            }
            if trimmed.contains('}') {
                depth = depth.saturating_sub(1);
            }
            let indented = format!("{}{}", INDENT_UNIT.repeat(depth), trimmed);
            if trimmed.contains('{') {
                depth += 1;
            }
            indented
        })
        .collect::<Vec<_>>()
        .join("\n")
}
