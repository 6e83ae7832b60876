//! Letter-profile index
//!
//! Words are grouped into buckets keyed by their number of distinct letters.
//! A query only scans buckets whose key does not exceed its own distinct-letter
//! count, and an entry matches when the query has at least as many of each
//! letter as the entry needs.
//!
//! Cost per query is O(vocabulary x alphabet) in the worst case, which is fine
//! for dictionaries of a few hundred thousand words.

use super::{IndexStats, WordFinder};
use crate::core::{LetterCounts, LetterPoints, ScoredWord, rank};
use rustc_hash::FxHashMap;

/// A stored vocabulary word with its letter multiset and precomputed score
#[derive(Debug, Clone, PartialEq, Eq)]
struct ProfileEntry {
    word: String,
    counts: LetterCounts,
    score: i32,
}

/// Bucket-and-scan word index
#[derive(Debug, Clone, Default)]
pub struct LetterProfileIndex {
    buckets: FxHashMap<usize, Vec<ProfileEntry>>,
    points: LetterPoints,
    words_added: usize,
    chars_added: usize,
}

impl LetterProfileIndex {
    /// Create an empty index scoring with `points`
    ///
    /// Scores are computed when a word is added.
    #[must_use]
    pub fn new(points: LetterPoints) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// The scoring table in use
    #[must_use]
    pub const fn points(&self) -> &LetterPoints {
        &self.points
    }

    /// Number of stored entries (duplicates included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether nothing has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of entries stored under a distinct-letter count
    #[must_use]
    pub fn bucket_len(&self, distinct: usize) -> usize {
        self.buckets.get(&distinct).map_or(0, Vec::len)
    }
}

impl WordFinder for LetterProfileIndex {
    fn add(&mut self, word: &str) -> &mut Self {
        tracing::trace!(word, "adding word");

        self.words_added += 1;
        self.chars_added += word.chars().count();

        let word = word.to_lowercase();
        let counts = LetterCounts::from_word(&word);

        if counts.distinct() == 0 {
            return self;
        }

        let score = self.points.score(&word);
        self.buckets
            .entry(counts.distinct())
            .or_default()
            .push(ProfileEntry {
                word,
                counts,
                score,
            });

        self
    }

    fn find_scored(&self, letters: &str) -> Vec<ScoredWord> {
        if letters.is_empty() {
            return Vec::new();
        }

        let available = LetterCounts::from_word(letters);

        // Key 0 never exists; buckets above the query's distinct count cannot match
        let mut matches: Vec<ScoredWord> = (1..=available.distinct())
            .filter_map(|distinct| self.buckets.get(&distinct))
            .flatten()
            .filter(|entry| entry.counts.is_subset_of(&available))
            .map(|entry| ScoredWord::new(entry.word.clone(), entry.score))
            .collect();

        rank(&mut matches);

        tracing::debug!(letters, found = matches.len(), "letter-profile search");

        matches
    }

    fn stats(&self) -> IndexStats {
        IndexStats {
            words_added: self.words_added,
            chars_added: self.chars_added,
            stored: self.len(),
        }
    }
}
