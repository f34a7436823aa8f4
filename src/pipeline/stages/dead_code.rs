//! Shape-based dead code removal. No usage or data-flow analysis is done;
//! only the literal textual forms below are dropped.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `function name() end`
static EMPTY_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+\w+\s*\(\s*\)\s*end\b").unwrap());

/// `local name = nil` with an optional `;`. When a line break follows, the
/// whitespace up to the last one goes too; otherwise only trailing spaces.
static NIL_LOCAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\blocal\s+\w+\s*=\s*nil\b\s*;?(?:\s*\n|[ \t]*)").unwrap());

pub fn remove_dead_code(code: &str) -> String {
    let code = EMPTY_FUNCTION.replace_all(code, "");
    NIL_LOCAL
        .replace_all(&code, |caps: &Captures| match caps.get(0) {
            Some(m) if !ends_at_nil(m.as_str(), &code[m.end()..]) => m.as_str().to_string(),
            _ => String::new(),
        })
        .into_owned()
}

/// The declaration is a bare `= nil` unless the text after it continues
/// the expression (`nil or 5`, `nil, 3`, `nil .. s`). A `;` always ends it.
fn ends_at_nil(matched: &str, rest: &str) -> bool {
    if matched.contains(';') {
        return true;
    }
    let rest = rest.trim_start();
    if rest.starts_with("--") {
        return true;
    }
    if starts_with_word(rest, "or") || starts_with_word(rest, "and") {
        return false;
    }
    !matches!(
        rest.chars().next(),
        Some(',' | '.' | ':' | '[' | '(' | '=' | '~' | '<' | '>' | '+' | '-' | '*' | '/' | '%' | '^')
    )
}

fn starts_with_word(text: &str, word: &str) -> bool {
    text.strip_prefix(word).is_some_and(|after| {
        !after
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_function_removed() {
        assert_eq!(remove_dead_code("function foo() end"), "");
        assert_eq!(remove_dead_code("x = 1\nfunction foo( ) end\ny = 2"), "x = 1\n\ny = 2");
    }

    #[test]
    fn test_function_with_body_or_params_kept() {
        let code = "function foo(a) end function bar() return 1 end function baz() ending()";
        assert_eq!(remove_dead_code(code), code);
    }

    #[test]
    fn test_nil_local_removed() {
        assert_eq!(remove_dead_code("local bar = nil"), "");
        assert_eq!(remove_dead_code("local bar = nil;\n  print(1)"), "  print(1)");
        assert_eq!(remove_dead_code("local a = nil local b = 2"), "local b = 2");
    }

    #[test]
    fn test_nil_headed_expressions_kept() {
        for code in [
            "local x = nil or 5\nprint(x)",
            "local t = nil, 3",
            "local s = nil .. y",
            "local b = nil\n  and ready",
            "local c = nil == other",
        ] {
            assert_eq!(remove_dead_code(code), code);
        }
    }

    #[test]
    fn test_nil_local_followed_by_statement_or_comment_removed() {
        assert_eq!(remove_dead_code("local x = nil order()"), "order()");
        assert_eq!(remove_dead_code("local x = nil -- unused\ny = 1"), "-- unused\ny = 1");
        assert_eq!(remove_dead_code("local x = nil; or_else()"), "or_else()");
    }

    #[test]
    fn test_nil_like_values_kept() {
        let code = "local bar = nilable\nlocal baz = nil_value";
        assert_eq!(remove_dead_code(code), code);
    }

    #[test]
    fn test_later_reads_are_not_considered() {
        assert_eq!(remove_dead_code("local x = nil\nprint(x)"), "print(x)");
    }
}
