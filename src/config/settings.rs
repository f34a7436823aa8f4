use serde::{Deserialize, Serialize};

use crate::context::EngineOptions;
use crate::io::output::OutputFormat;

/// Root configuration structure, read from `.luadeob.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DeobfuscatorConfig {
    /// Expression simplifier behavior
    #[serde(default)]
    pub simplify: Option<SimplifyConfig>,

    /// Warning reporting
    #[serde(default)]
    pub warnings: Option<WarningsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SimplifyConfig {
    /// Rerun identities until nothing changes instead of a single pass
    #[serde(default)]
    pub fixed_point: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WarningsConfig {
    /// List escapes the decoder left untouched
    #[serde(default)]
    pub report_undecoded: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub default_format: Option<OutputFormat>,
}

impl DeobfuscatorConfig {
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            fixed_point_simplify: self.simplify.map(|s| s.fixed_point).unwrap_or(false),
            report_undecoded: self
                .warnings
                .map(|w| w.report_undecoded)
                .unwrap_or(false),
        }
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output.and_then(|o| o.default_format)
    }
}
