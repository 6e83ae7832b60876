//! Configuration loading from disk.

use super::schema::AppConfig;
use crate::core::{ALPHABET_SIZE, is_valid_letter, letter_index};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
}

/// Load and validate configuration from a TOML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, or fails validation.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    validate_config(&config)?;

    tracing::info!(path = %path.display(), engine = %config.engine, "configuration loaded");

    Ok(config)
}

/// Semantic checks that serde cannot express
///
/// # Errors
///
/// Returns `ConfigError::Validation` listing every problem found.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if let Err(err) = config.letter_points() {
        errors.push(err.to_string());
    }

    if !matches!(config.engine.as_str(), "trie" | "profile" | "dictionary") {
        errors.push(format!("unknown engine '{}'", config.engine));
    }

    let mut seen = [false; ALPHABET_SIZE];
    for group in config.letter_points.keys() {
        for c in group.chars().flat_map(char::to_lowercase) {
            if is_valid_letter(c) && std::mem::replace(&mut seen[letter_index(c)], true) {
                errors.push(format!("letter '{c}' is given points more than once"));
            }
        }
    }

    if config.server.host.trim().is_empty() {
        errors.push("server host is empty".to_string());
    }
    if config.server.port == 0 {
        errors.push("server port must be non-zero".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors))
    }
}
