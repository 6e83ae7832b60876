//! Word finding command
//!
//! Runs a single letter-bag query and keeps the scored matches.

use crate::core::ScoredWord;
use crate::finder::{FinderType, WordFinder};
use std::time::{Duration, Instant};

/// Configuration for a find query
pub struct FindConfig {
    pub letters: String,
    pub limit: Option<usize>,
}

impl FindConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            limit: None,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Result of a find query
pub struct FindResult {
    pub letters: String,
    pub engine: &'static str,
    /// Matches kept after applying the limit, highest score first
    pub matches: Vec<ScoredWord>,
    /// Number of matches before the limit
    pub total_matches: usize,
    pub duration: Duration,
}

/// Find every word buildable from `config.letters`
pub fn find_words(config: FindConfig, finder: &FinderType) -> FindResult {
    let start = Instant::now();
    let mut matches = finder.find_scored(&config.letters);
    let duration = start.elapsed();

    let total_matches = matches.len();
    if let Some(limit) = config.limit {
        matches.truncate(limit);
    }

    FindResult {
        letters: config.letters,
        engine: finder.name(),
        matches,
        total_matches,
        duration,
    }
}
