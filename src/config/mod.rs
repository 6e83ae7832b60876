//! Configuration management
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation (letter groups, point range, bind address)
//!     → AppConfig (validated, immutable)
//!     → LetterPoints snapshot handed to the engine at construction
//! ```
//!
//! Without a config file the built-in defaults apply: trie engine, standard
//! tile values, embedded vocabulary, server on 127.0.0.1:8080.

mod loader;
mod schema;

pub use loader::{ConfigError, load_config, validate_config};
pub use schema::{AppConfig, ServerConfig, WordsConfig};
