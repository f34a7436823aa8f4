use crate::context::DeobfuscationContext;
use once_cell::sync::Lazy;
use regex::Regex;

/// `function <letter + 4 or more hex digits>(`
static OBFUSCATED_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+([a-zA-Z][0-9a-fA-F]{4,})\s*\(").unwrap());

/// Renames declared functions whose names look generated. Call sites that
/// spell the same token are renamed with them; functions never declared
/// with this shape are left alone.
pub fn rename_functions(code: &str, ctx: &mut DeobfuscationContext) -> String {
    for caps in OBFUSCATED_DECLARATION.captures_iter(code) {
        ctx.functions.assign(&caps[1]);
    }

    ctx.functions.apply(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_declaration_and_call_sites_renamed() {
        let mut ctx = DeobfuscationContext::default();
        let out = rename_functions("function fa1b2(x) return x end fa1b2(3)", &mut ctx);
        assert_eq!(out, "function initialize(x) return x end initialize(3)");
        assert_eq!(ctx.functions.len(), 1);
    }

    #[test]
    fn test_names_follow_declaration_order() {
        let mut ctx = DeobfuscationContext::default();
        let out = rename_functions(
            "function c0ffee () end function babe5(a) end function c0ffee(b) end",
            &mut ctx,
        );
        assert_eq!(
            out,
            "function initialize () end function update(a) end function initialize(b) end"
        );
        assert_eq!(ctx.functions.len(), 2);
    }

    #[test]
    fn test_undeclared_or_short_names_untouched() {
        let mut ctx = DeobfuscationContext::default();
        let code = "function fab(x) end local f = function(y) end d4e5f6(1)";
        assert_eq!(rename_functions(code, &mut ctx), code);
        assert!(ctx.functions.is_empty());
    }

    #[test]
    fn test_function_table_is_separate_from_identifiers() {
        let mut ctx = DeobfuscationContext::default();
        ctx.identifiers.assign("x9f3a2b");
        rename_functions("function dead1() end", &mut ctx);
        assert_eq!(ctx.identifiers.len(), 1);
        assert_eq!(ctx.functions.get("dead1"), Some("initialize"));
    }
}
