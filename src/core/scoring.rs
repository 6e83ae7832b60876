//! Letter point values
//!
//! A fixed table of 26 signed point values, one per letter. Engines take an
//! immutable copy at construction time; changing scores means rebuilding the index.

use super::letters::{ALPHABET_SIZE, is_valid_letter, letter_index, valid_letters};
use thiserror::Error;

/// Errors raised while building a [`LetterPoints`] table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("letter group '{group}' contains '{letter}', which is not a letter a-z")]
    InvalidLetter { group: String, letter: char },
    #[error("letter group '{group}' has {points} points, outside {}..={}", i8::MIN, i8::MAX)]
    PointsOutOfRange { group: String, points: i64 },
}

/// Point value for each letter of the alphabet
///
/// Defaults to all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LetterPoints([i8; ALPHABET_SIZE]);

impl LetterPoints {
    /// All-zero table
    pub const ZERO: Self = Self([0; ALPHABET_SIZE]);

    /// Create a table from raw values indexed by alphabet position
    #[must_use]
    pub const fn new(points: [i8; ALPHABET_SIZE]) -> Self {
        Self(points)
    }

    /// Standard word-game tile values
    ///
    /// ```
    /// use word_finder::core::LetterPoints;
    ///
    /// let points = LetterPoints::standard();
    /// assert_eq!(points.score("quiz"), 22);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        const GROUPS: [(&str, i8); 7] = [
            ("aeilnorstu", 1),
            ("dg", 2),
            ("bcmp", 3),
            ("fhvwy", 4),
            ("k", 5),
            ("jx", 8),
            ("qz", 10),
        ];

        let mut points = Self::ZERO;
        for (group, value) in GROUPS {
            for c in group.chars() {
                points.0[letter_index(c)] = value;
            }
        }
        points
    }

    /// Build a table from letter groups, every letter of a group getting its value
    ///
    /// Letters not mentioned score zero. Later groups overwrite earlier ones.
    ///
    /// # Errors
    /// Returns `ScoringError` if a group contains anything other than a letter
    /// (case-insensitive) or if a value does not fit in a signed byte.
    pub fn from_groups<'a, I>(groups: I) -> Result<Self, ScoringError>
    where
        I: IntoIterator<Item = (&'a str, i64)>,
    {
        let mut points = Self::ZERO;

        for (group, value) in groups {
            let value = i8::try_from(value).map_err(|_| ScoringError::PointsOutOfRange {
                group: group.to_string(),
                points: value,
            })?;

            for c in group.chars().flat_map(char::to_lowercase) {
                if !is_valid_letter(c) {
                    return Err(ScoringError::InvalidLetter {
                        group: group.to_string(),
                        letter: c,
                    });
                }
                points.0[letter_index(c)] = value;
            }
        }

        Ok(points)
    }

    /// Points at alphabet position `index`
    #[inline]
    #[must_use]
    pub const fn at(&self, index: usize) -> i8 {
        self.0[index]
    }

    /// Points for letter `c`, zero for invalid letters
    #[must_use]
    pub const fn of(&self, c: char) -> i8 {
        if is_valid_letter(c) {
            self.0[letter_index(c)]
        } else {
            0
        }
    }

    /// Sum of the points of every valid letter of `word`
    ///
    /// Repeated letters count once per occurrence. Invalid letters add nothing.
    #[must_use]
    pub fn score(&self, word: &str) -> i32 {
        valid_letters(word)
            .map(|c| i32::from(self.0[letter_index(c)]))
            .sum()
    }

    /// Raw values indexed by alphabet position
    #[must_use]
    pub const fn as_array(&self) -> &[i8; ALPHABET_SIZE] {
        &self.0
    }
}
