//! Engine entry point.

use crate::context::EngineOptions;
use crate::core::DeobfuscationResult;
use crate::pipeline::Pipeline;
use crate::statistics::collect_statistics;
use tracing::{info, info_span};

/// Immutable deobfuscation engine.
///
/// All per-call state lives in a context created inside
/// [`Deobfuscator::deobfuscate`], so one instance can be shared across
/// threads and called concurrently.
///
/// # Example
///
/// ```rust
/// use luadeob::Deobfuscator;
///
/// let engine = Deobfuscator::default();
/// let result = engine.deobfuscate(r#"local s = "\72\105""#);
/// assert!(result.deobfuscated_code.contains("\"Hi\""));
/// assert_eq!(result.statistics.strings_decoded, 2);
/// ```
pub struct Deobfuscator {
    pipeline: Pipeline,
    options: EngineOptions,
}

impl Deobfuscator {
    pub fn new(options: EngineOptions) -> Self {
        Self::with_pipeline(Pipeline::standard(), options)
    }

    /// Use a custom stage list instead of the standard seven stages.
    pub fn with_pipeline(pipeline: Pipeline, options: EngineOptions) -> Self {
        Self { pipeline, options }
    }

    /// Deobfuscate `source`. Never fails; unmatched text passes through.
    pub fn deobfuscate(&self, source: &str) -> DeobfuscationResult {
        let _span = info_span!("deobfuscate", input_len = source.len()).entered();

        let (code, ctx) = self.pipeline.run(source, self.options);
        let statistics = collect_statistics(source, &code, &ctx);

        info!(
            original_lines = statistics.original_line_count,
            final_lines = statistics.final_line_count,
            identifiers = statistics.identifiers_renamed,
            strings = statistics.strings_decoded,
            functions = statistics.functions_renamed,
            complexity = %statistics.complexity_class,
            confidence = statistics.confidence_score,
            "deobfuscation complete"
        );

        DeobfuscationResult {
            deobfuscated_code: code,
            statistics,
            warnings: ctx.warnings,
        }
    }
}

impl Default for Deobfuscator {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

/// Deobfuscate with the default engine options.
pub fn deobfuscate(source: &str) -> DeobfuscationResult {
    Deobfuscator::default().deobfuscate(source)
}
