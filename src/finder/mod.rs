//! Word-matching engines
//!
//! Two interchangeable indexes implement the [`WordFinder`] contract:
//! - [`LetterProfileIndex`]: buckets words by distinct-letter count, matches by comparing counts
//! - [`Trie`]: a 26-ary prefix tree searched with a live letter budget

mod profile;
mod shared;
mod trie;

pub use profile::LetterProfileIndex;
pub use shared::SharedFinder;
pub use trie::Trie;

use crate::core::{LetterPoints, ScoredWord};

/// Counters describing what an index holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    /// Calls to `add`, including words with no valid letters
    pub words_added: usize,
    /// Characters seen across all added words
    pub chars_added: usize,
    /// Stored entries (letter-profile) or allocated nodes (trie, root included)
    pub stored: usize,
}

/// Find every vocabulary word that can be built from a bag of letters
pub trait WordFinder {
    /// Add a vocabulary word
    ///
    /// Words are lowercased; characters outside `a..=z` never count toward
    /// matching or scoring. A word with no valid letter is ignored.
    fn add(&mut self, word: &str) -> &mut Self;

    /// Matching words with their scores, highest score first
    ///
    /// Returns an empty list for an empty query.
    fn find_scored(&self, letters: &str) -> Vec<ScoredWord>;

    /// Counters describing the index contents
    fn stats(&self) -> IndexStats;

    /// Matching words, highest score first
    fn find_matches(&self, letters: &str) -> Vec<String> {
        self.find_scored(letters)
            .into_iter()
            .map(|m| m.word)
            .collect()
    }
}

/// Enum wrapper for both engine types
///
/// Allows runtime selection of the engine while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum FinderType {
    /// Prefix tree (default)
    Trie(Trie),
    /// Distinct-letter buckets
    Profile(LetterProfileIndex),
}

impl FinderType {
    /// Create an empty engine from its name
    ///
    /// Supported names: "trie", "profile" (alias "dictionary").
    /// Defaults to the trie if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, points: LetterPoints) -> Self {
        match name {
            "profile" | "dictionary" => Self::Profile(LetterProfileIndex::new(points)),
            _ => Self::Trie(Trie::new(points)),
        }
    }

    /// Name of the wrapped engine
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Trie(_) => "trie",
            Self::Profile(_) => "profile",
        }
    }
}

impl WordFinder for FinderType {
    fn add(&mut self, word: &str) -> &mut Self {
        match self {
            Self::Trie(t) => {
                t.add(word);
            }
            Self::Profile(p) => {
                p.add(word);
            }
        }
        self
    }

    fn find_scored(&self, letters: &str) -> Vec<ScoredWord> {
        match self {
            Self::Trie(t) => t.find_scored(letters),
            Self::Profile(p) => p.find_scored(letters),
        }
    }

    fn stats(&self) -> IndexStats {
        match self {
            Self::Trie(t) => t.stats(),
            Self::Profile(p) => p.stats(),
        }
    }
}
