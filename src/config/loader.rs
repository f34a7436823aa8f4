use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::settings::DeobfuscatorConfig;
use crate::errors::{DeobfuscatorError, Result};

pub const CONFIG_FILE_NAME: &str = ".luadeob.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str) -> std::result::Result<DeobfuscatorConfig, String> {
    toml::from_str::<DeobfuscatorConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
}

/// Load an explicitly requested config file. Unlike discovery, a missing
/// or malformed file is an error here.
pub fn load_config_from(path: &Path) -> Result<DeobfuscatorConfig> {
    let contents = read_config_file(path).map_err(|e| {
        DeobfuscatorError::config(
            format!("Failed to read {}: {}", path.display(), e),
            Some(path.to_path_buf()),
        )
    })?;
    let config =
        parse_config(&contents).map_err(|e| DeobfuscatorError::config(e, Some(path.into())))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config file, logging instead of failing.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<DeobfuscatorConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Only log actual errors, not "file not found"
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and up to `max_depth - 1` of its ancestors
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for the first loadable config file.
pub fn discover_config(start: PathBuf) -> DeobfuscatorConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            DeobfuscatorConfig::default()
        })
}

pub fn load_config() -> DeobfuscatorConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            DeobfuscatorConfig::default()
        }
    }
}
