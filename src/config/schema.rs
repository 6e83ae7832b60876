//! Configuration schema

use crate::core::{LetterPoints, ScoringError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Engine name: "trie" or "profile"
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Letter group to points for every letter of the group
    ///
    /// A config file without this table scores every letter zero.
    #[serde(default)]
    pub letter_points: BTreeMap<String, i64>,

    #[serde(default)]
    pub words: WordsConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Where the vocabulary comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordsConfig {
    /// Line-delimited word file; the embedded vocabulary when absent
    pub location: Option<PathBuf>,
}

/// HTTP server bind address
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_engine() -> String {
    "trie".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AppConfig {
    /// Built-in configuration: standard tile values
    fn default() -> Self {
        let letter_points = [
            ("aeilnorstu", 1),
            ("dg", 2),
            ("bcmp", 3),
            ("fhvwy", 4),
            ("k", 5),
            ("jx", 8),
            ("qz", 10),
        ]
        .into_iter()
        .map(|(group, points)| (group.to_string(), points))
        .collect();

        Self {
            engine: default_engine(),
            letter_points,
            words: WordsConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the scoring table described by `letter_points`
    ///
    /// # Errors
    /// Returns `ScoringError` for a group with a non-letter or an out-of-range value.
    pub fn letter_points(&self) -> Result<LetterPoints, ScoringError> {
        LetterPoints::from_groups(
            self.letter_points
                .iter()
                .map(|(group, &points)| (group.as_str(), points)),
        )
    }

    /// Server bind address as `host:port`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
