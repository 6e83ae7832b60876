//! Scored match representation
//!
//! A ScoredWord pairs a matched vocabulary word with the score it was ranked by.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A matched word along with its score
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScoredWord {
    pub word: String,
    pub score: i32,
}

impl ScoredWord {
    #[must_use]
    pub fn new(word: impl Into<String>, score: i32) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.word
    }

    /// Order by score, highest first
    ///
    /// Equal scores compare equal so a stable sort keeps discovery order.
    #[must_use]
    pub fn by_score_desc(a: &Self, b: &Self) -> Ordering {
        b.score.cmp(&a.score)
    }
}

impl fmt::Display for ScoredWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.word, self.score)
    }
}

/// Sort matches by descending score, keeping ties in discovery order
pub fn rank(matches: &mut [ScoredWord]) {
    matches.sort_by(ScoredWord::by_score_desc);
}
