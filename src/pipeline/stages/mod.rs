//! Text transformation stages, in pipeline order.
//!
//! Every stage is total over arbitrary text: input that matches none of
//! its patterns passes through unchanged.

pub mod code_formatter;
pub mod dead_code;
pub mod expression_simplifier;
pub mod final_formatter;
pub mod function_renamer;
pub mod identifier_renamer;
pub mod string_decoder;

pub use code_formatter::format_code;
pub use dead_code::remove_dead_code;
pub use expression_simplifier::{simplify_expressions, simplify_once, simplify_to_fixed_point};
pub use final_formatter::final_format;
pub use function_renamer::rename_functions;
pub use identifier_renamer::rename_identifiers;
pub use string_decoder::decode_strings;
