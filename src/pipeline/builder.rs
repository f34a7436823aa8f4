//! Fluent builder for composing rewriting stages.

use super::stage::Stage;
use super::Pipeline;

/// Builder for constructing pipelines.
///
/// # Example
///
/// ```rust
/// use luadeob::pipeline::{PipelineBuilder, PureStage};
///
/// let pipeline = PipelineBuilder::new()
///     .stage(PureStage::new("trim", |text: &str| text.trim().to_string()))
///     .build();
/// assert_eq!(pipeline.stage_names(), vec!["trim"]);
/// ```
#[derive(Default)]
pub struct PipelineBuilder {
    stages: Vec<Box<dyn Stage>>,
}

impl PipelineBuilder {
    /// Create a new empty pipeline builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage. Stages run in the order they are added.
    pub fn stage<S>(mut self, stage: S) -> Self
    where
        S: Stage + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    /// Build the final pipeline ready for execution.
    pub fn build(self) -> Pipeline {
        Pipeline {
            stages: self.stages,
        }
    }
}
