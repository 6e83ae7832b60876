//! Build-then-freeze sharing of a loaded engine
//!
//! Engines are filled by a single writer and then only read. `SharedFinder`
//! publishes a frozen engine behind an `ArcSwap`: readers grab a snapshot
//! without locking, and a rebuilt engine can replace it atomically. Scores and
//! vocabulary are never mutated in place.

use super::{FinderType, IndexStats, WordFinder};
use crate::core::ScoredWord;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Frozen engine shared across threads
#[derive(Debug)]
pub struct SharedFinder {
    current: ArcSwap<FinderType>,
}

impl SharedFinder {
    /// Freeze a fully loaded engine
    #[must_use]
    pub fn new(finder: FinderType) -> Self {
        Self {
            current: ArcSwap::from_pointee(finder),
        }
    }

    /// Snapshot of the engine currently published
    ///
    /// The snapshot stays valid even if another engine is swapped in meanwhile.
    #[must_use]
    pub fn snapshot(&self) -> Arc<FinderType> {
        self.current.load_full()
    }

    /// Publish a rebuilt engine, returning the one it replaces
    pub fn replace(&self, finder: FinderType) -> Arc<FinderType> {
        let stats = finder.stats();
        let previous = self.current.swap(Arc::new(finder));
        tracing::info!(
            engine = previous.name(),
            words = stats.words_added,
            "published rebuilt index"
        );
        previous
    }

    /// Matching words with scores from the current engine
    #[must_use]
    pub fn find_scored(&self, letters: &str) -> Vec<ScoredWord> {
        self.current.load().find_scored(letters)
    }

    /// Matching words from the current engine
    #[must_use]
    pub fn find_matches(&self, letters: &str) -> Vec<String> {
        self.current.load().find_matches(letters)
    }

    /// Counters of the current engine
    #[must_use]
    pub fn stats(&self) -> IndexStats {
        self.current.load().stats()
    }
}

impl From<FinderType> for SharedFinder {
    fn from(finder: FinderType) -> Self {
        Self::new(finder)
    }
}
