//! Error types for everything around the engine.
//!
//! The engine itself never fails. Reading inputs, loading configuration and
//! writing reports can, and they report through [`DeobfuscatorError`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeobfuscatorError {
    /// File system related errors
    #[error("I/O error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// `--example` key not present in the corpus
    #[error("Unknown example '{0}'")]
    UnknownExample(String),

    /// Input rejected before it reached the engine
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Report writing errors
    #[error("Output error: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, DeobfuscatorError>;

impl DeobfuscatorError {
    /// Wrap an I/O failure on `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        Self::Io {
            message: format!("{}: {}", path.display(), source),
            path: Some(path),
            source: Some(source),
        }
    }

    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path,
        }
    }

    /// The file involved, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } | Self::Config { path, .. } => path.as_ref(),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DeobfuscatorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}
