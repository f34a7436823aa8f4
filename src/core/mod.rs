//! Result types returned by the engine.

pub mod types;

pub use types::{ComplexityClass, DeobfuscationResult, Statistics};
