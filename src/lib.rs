// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod core;
pub mod corpus;
pub mod engine;
pub mod errors;
pub mod io;
pub mod pipeline;
pub mod statistics;

// Re-export commonly used types
pub use crate::context::{DeobfuscationContext, EngineOptions, RenameTable};
pub use crate::core::{ComplexityClass, DeobfuscationResult, Statistics};
pub use crate::engine::{deobfuscate, Deobfuscator};
pub use crate::errors::{DeobfuscatorError, Result};
pub use crate::pipeline::{Pipeline, PipelineBuilder, Stage};
