//! Stage abstraction for the rewriting pipeline.
//!
//! Every stage consumes the whole buffer and returns a new one. Stages that
//! build rename or decode tables also receive the per-call
//! [`DeobfuscationContext`]; the rest only see text.

use crate::context::DeobfuscationContext;

/// One step of the pipeline.
///
/// # Example
///
/// ```rust
/// use luadeob::context::DeobfuscationContext;
/// use luadeob::pipeline::{PureStage, Stage};
///
/// let stage = PureStage::new("Upper", |text: &str| text.to_uppercase());
/// let mut ctx = DeobfuscationContext::default();
/// assert_eq!(stage.execute("end".to_string(), &mut ctx), "END");
/// ```
pub trait Stage: Send + Sync {
    /// Run this stage over `buffer`.
    fn execute(&self, buffer: String, ctx: &mut DeobfuscationContext) -> String;

    /// Stage name for logging.
    fn name(&self) -> &str;
}

/// A stage that only transforms text.
///
/// Pure stages are deterministic and can be tested on a bare string.
pub struct PureStage<F> {
    name: String,
    func: F,
}

impl<F> PureStage<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    /// Create a new pure stage with a name and transformation function.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Stage for PureStage<F>
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn execute(&self, buffer: String, _ctx: &mut DeobfuscationContext) -> String {
        (self.func)(&buffer)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A stage that reads or populates the per-call context.
///
/// # Example
///
/// ```rust
/// use luadeob::context::DeobfuscationContext;
/// use luadeob::pipeline::{ContextStage, Stage};
///
/// let stage = ContextStage::new("Count", |text: &str, ctx: &mut DeobfuscationContext| {
///     ctx.warn(format!("{} bytes", text.len()));
///     text.to_string()
/// });
/// let mut ctx = DeobfuscationContext::default();
/// stage.execute("abc".to_string(), &mut ctx);
/// assert_eq!(ctx.warnings, vec!["3 bytes".to_string()]);
/// ```
pub struct ContextStage<F> {
    name: String,
    func: F,
}

impl<F> ContextStage<F>
where
    F: Fn(&str, &mut DeobfuscationContext) -> String + Send + Sync,
{
    /// Create a new context stage with a name and function.
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> Stage for ContextStage<F>
where
    F: Fn(&str, &mut DeobfuscationContext) -> String + Send + Sync,
{
    fn execute(&self, buffer: String, ctx: &mut DeobfuscationContext) -> String {
        (self.func)(&buffer, ctx)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
