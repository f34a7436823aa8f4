use crate::config::{load_config, load_config_from, DeobfuscatorConfig};
use crate::context::EngineOptions;
use crate::corpus;
use crate::engine::Deobfuscator;
use crate::errors::{DeobfuscatorError, Result};
use crate::io::{self, create_writer, OutputFormat, Report};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info};

/// Where the scripts come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Files(Vec<PathBuf>),
    Example(String),
    Stdin,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: InputSource,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub fixed_point: bool,
    pub report_warnings: bool,
}

pub fn handle_run(config: RunConfig) -> Result<()> {
    let file_config = match &config.config {
        Some(path) => load_config_from(path)?,
        None => load_config(),
    };
    let options = merge_options(&file_config, config.fixed_point, config.report_warnings);
    let format = config
        .format
        .or(file_config.default_format())
        .unwrap_or(OutputFormat::Terminal);

    let inputs = load_inputs(&config.input)?;
    let reports = deobfuscate_all(&Deobfuscator::new(options), inputs)?;

    match &config.output {
        Some(path) => {
            let mut buffer = Vec::new();
            create_writer(&mut buffer, format).write_reports(&reports)?;
            let rendered =
                String::from_utf8(buffer).map_err(|e| DeobfuscatorError::Output(e.to_string()))?;
            io::write_file(path, &rendered)?;
            info!("Wrote report to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            create_writer(stdout.lock(), format).write_reports(&reports)?;
        }
    }
    Ok(())
}

/// Command-line flags can only switch options on.
pub fn merge_options(
    file_config: &DeobfuscatorConfig,
    fixed_point: bool,
    report_warnings: bool,
) -> EngineOptions {
    let from_file = file_config.engine_options();
    EngineOptions {
        fixed_point_simplify: from_file.fixed_point_simplify || fixed_point,
        report_undecoded: from_file.report_undecoded || report_warnings,
    }
}

/// Resolves the input source into `(label, text)` pairs in order.
pub fn load_inputs(input: &InputSource) -> Result<Vec<(String, String)>> {
    match input {
        InputSource::Files(paths) => paths
            .iter()
            .map(|path| Ok((path.display().to_string(), io::read_file(path)?)))
            .collect(),
        InputSource::Example(key) => corpus::get(key)
            .map(|example| vec![(format!("example:{}", example.key), example.source.to_string())])
            .ok_or_else(|| DeobfuscatorError::UnknownExample(key.clone())),
        InputSource::Stdin => Ok(vec![("<stdin>".to_string(), io::read_stdin()?)]),
    }
}

/// Runs every input through one shared engine in parallel. Report order
/// follows input order.
pub fn deobfuscate_all(
    engine: &Deobfuscator,
    inputs: Vec<(String, String)>,
) -> Result<Vec<Report>> {
    if let Some((label, _)) = inputs.iter().find(|(_, text)| text.trim().is_empty()) {
        return Err(DeobfuscatorError::InvalidInput(format!(
            "{label} contains no code"
        )));
    }

    debug!("Deobfuscating {} input(s)", inputs.len());
    Ok(inputs
        .into_par_iter()
        .map(|(label, text)| Report::new(label, engine.deobfuscate(&text)))
        .collect())
}
