//! Word Finder
//!
//! Find every word of a vocabulary that can be built from a bag of letters,
//! ranked by per-letter point values. Two interchangeable engines answer the
//! same queries: a letter-profile index and a prefix tree.
//!
//! # Quick Start
//!
//! ```rust
//! use word_finder::core::LetterPoints;
//! use word_finder::finder::{Trie, WordFinder};
//!
//! let mut trie = Trie::new(LetterPoints::standard());
//! trie.add("a").add("ah").add("at").add("ha").add("hat");
//!
//! assert_eq!(trie.find_matches("tha"), ["hat", "ah", "ha", "at", "a"]);
//! ```

// Letters and scoring
pub mod core;

// Matching engines
pub mod finder;

// Vocabulary sources
pub mod wordlists;

// TOML configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// HTTP query service
pub mod server;
