use anyhow::Result;
use luadeob::cli::{Cli, Commands};
use luadeob::commands::{InputSource, RunConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = luadeob::cli::parse_args();

    match cli.command {
        command @ Commands::Run { .. } => handle_run_command(command)?,
        Commands::Examples => luadeob::commands::examples::list_examples()?,
        Commands::Init { force } => luadeob::commands::init::init_config(force)?,
    }
    Ok(())
}

fn handle_run_command(command: Commands) -> Result<()> {
    if let Commands::Run {
        files,
        example,
        format,
        output,
        config,
        fixed_point,
        report_warnings,
        verbosity,
    } = command
    {
        init_logging(verbosity);

        let config = RunConfig {
            input: select_input(files, example),
            format: format.map(Into::into),
            output,
            config,
            fixed_point,
            report_warnings,
        };
        luadeob::commands::handle_run(config)?;
        Ok(())
    } else {
        Err(anyhow::anyhow!("Invalid command"))
    }
}

// Pure function to pick the input source
fn select_input(files: Vec<std::path::PathBuf>, example: Option<String>) -> InputSource {
    match (example, files.is_empty()) {
        (Some(key), _) => InputSource::Example(key),
        (None, false) => InputSource::Files(files),
        (None, true) => InputSource::Stdin,
    }
}

// Pure function to map -v count to a default filter
fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// Side effect: install the subscriber (stderr keeps stdout clean for reports)
fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("Note: logging already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_select_input() {
        assert_eq!(
            select_input(vec![], Some("simple".into())),
            InputSource::Example("simple".into())
        );
        assert_eq!(
            select_input(vec![PathBuf::from("a.lua")], None),
            InputSource::Files(vec![PathBuf::from("a.lua")])
        );
        assert_eq!(select_input(vec![], None), InputSource::Stdin);
    }

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(9), "trace");
    }
}
