use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "luadeob")]
#[command(about = "Heuristic deobfuscator for escape-encoded Lua scripts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deobfuscate scripts (reads stdin when no file or example is given)
    Run {
        /// Script files to deobfuscate
        files: Vec<PathBuf>,

        /// Deobfuscate a bundled sample instead of a file
        #[arg(long, conflicts_with = "files")]
        example: Option<String>,

        /// Output format (defaults to the config file's, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .luadeob.toml)
        #[arg(long, env = "LUADEOB_CONFIG")]
        config: Option<PathBuf>,

        /// Simplify expressions until nothing changes
        #[arg(long)]
        fixed_point: bool,

        /// Report escape sequences that were left undecoded
        #[arg(long)]
        report_warnings: bool,

        /// Increase log verbosity (-v info, -vv debug, -vvv trace)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List the bundled sample scripts
    Examples,

    /// Write a default .luadeob.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
