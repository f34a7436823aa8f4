//! The rewriting pipeline.
//!
//! A [`Pipeline`] is an ordered list of [`Stage`]s. Running it creates a
//! fresh [`DeobfuscationContext`], threads the buffer and the context
//! through every stage, and hands both back to the caller.

pub mod builder;
pub mod stage;
pub mod stages;

pub use builder::PipelineBuilder;
pub use stage::{ContextStage, PureStage, Stage};

use crate::context::{DeobfuscationContext, EngineOptions};
use std::time::Instant;
use tracing::{debug, debug_span};

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// The seven deobfuscation stages in their canonical order.
    pub fn standard() -> Self {
        PipelineBuilder::new()
            .stage(ContextStage::new("decode strings", stages::decode_strings))
            .stage(PureStage::new("format code", stages::format_code))
            .stage(ContextStage::new(
                "rename identifiers",
                stages::rename_identifiers,
            ))
            .stage(ContextStage::new("rename functions", stages::rename_functions))
            .stage(ContextStage::new(
                "simplify expressions",
                stages::simplify_expressions,
            ))
            .stage(PureStage::new("remove dead code", stages::remove_dead_code))
            .stage(PureStage::new("final format", stages::final_format))
            .build()
    }

    /// Run every stage over `source` with a context built from `options`.
    pub fn run(&self, source: &str, options: EngineOptions) -> (String, DeobfuscationContext) {
        let mut ctx = DeobfuscationContext::new(options);
        let mut buffer = source.to_string();

        for (i, stage) in self.stages.iter().enumerate() {
            let _span = debug_span!("stage", index = i + 1, stage = stage.name()).entered();
            let start = Instant::now();
            let input_len = buffer.len();

            buffer = stage.execute(buffer, &mut ctx);

            debug!(
                input_len,
                output_len = buffer.len(),
                elapsed_us = start.elapsed().as_micros() as u64,
                "stage finished"
            );
        }

        (buffer, ctx)
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pipeline_order() {
        assert_eq!(
            Pipeline::standard().stage_names(),
            vec![
                "decode strings",
                "format code",
                "rename identifiers",
                "rename functions",
                "simplify expressions",
                "remove dead code",
                "final format",
            ]
        );
    }

    #[test]
    fn test_each_run_starts_with_empty_tables() {
        let pipeline = Pipeline::standard();
        let (_, first) = pipeline.run("local x9f3a2b = 1", EngineOptions::default());
        let (_, second) = pipeline.run("print(1)", EngineOptions::default());
        assert_eq!(first.identifiers.len(), 1);
        assert!(second.identifiers.is_empty());
    }
}
