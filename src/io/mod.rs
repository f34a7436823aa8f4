pub mod output;

pub use output::{create_writer, OutputFormat, OutputWriter, Report};

use crate::errors::{DeobfuscatorError, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| DeobfuscatorError::io(path, e))
}

pub fn read_stdin() -> Result<String> {
    let mut contents = String::new();
    std::io::stdin().read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| DeobfuscatorError::io(path, e))
}
