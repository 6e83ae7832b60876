//! Alphabet bounds and letter multisets
//!
//! Only the 26 lowercase ASCII letters take part in indexing, matching and
//! scoring. Everything else is an invalid letter: it is skipped, never rejected.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// First valid letter
pub const FIRST_LETTER: char = 'a';

/// Last valid letter
pub const LAST_LETTER: char = 'z';

/// Whether `c` lies in `a..=z`
///
/// Case is expected to be normalized by the caller, so `'A'` is not valid.
#[inline]
#[must_use]
pub const fn is_valid_letter(c: char) -> bool {
    c >= FIRST_LETTER && c <= LAST_LETTER
}

/// Zero-based position of `c` within `a..=z`
///
/// Only meaningful for letters accepted by [`is_valid_letter`].
#[inline]
#[must_use]
pub const fn letter_index(c: char) -> usize {
    (c as u32 - FIRST_LETTER as u32) as usize
}

/// Letter at a zero-based alphabet position
///
/// # Panics
/// Panics if `index >= ALPHABET_SIZE`
#[inline]
#[must_use]
pub const fn index_letter(index: usize) -> char {
    assert!(index < ALPHABET_SIZE);
    (b'a' + index as u8) as char
}

/// Iterate over the valid letters of `text` after lowercasing it
pub fn valid_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| is_valid_letter(c))
}

/// Per-letter occurrence counts over the fixed alphabet
///
/// A zero count means the letter is absent; [`LetterCounts::get`] reports it as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct LetterCounts {
    counts: [u32; ALPHABET_SIZE],
    distinct: usize,
    total: u32,
}

impl LetterCounts {
    /// Count the valid letters of `word`, ignoring case and invalid characters
    ///
    /// # Examples
    /// ```
    /// use word_finder::core::LetterCounts;
    ///
    /// let counts = LetterCounts::from_word("Hello!");
    /// assert_eq!(counts.get('l'), Some(2));
    /// assert_eq!(counts.get('z'), None);
    /// assert_eq!(counts.distinct(), 4);
    /// assert_eq!(counts.total(), 5);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts = Self::default();
        for c in valid_letters(word) {
            counts.increment(letter_index(c));
        }
        counts
    }

    /// Count of letter `c`, `None` if absent or not a valid letter
    #[must_use]
    pub fn get(&self, c: char) -> Option<u32> {
        if is_valid_letter(c) {
            self.get_index(letter_index(c))
        } else {
            None
        }
    }

    /// Count at alphabet position `index`, `None` if absent
    #[inline]
    #[must_use]
    pub const fn get_index(&self, index: usize) -> Option<u32> {
        match self.counts[index] {
            0 => None,
            n => Some(n),
        }
    }

    /// Number of distinct letters present
    #[inline]
    #[must_use]
    pub const fn distinct(&self) -> usize {
        self.distinct
    }

    /// Total number of letters, repetitions included
    #[inline]
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Whether no valid letter was counted
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Raw counts indexed by alphabet position
    #[inline]
    #[must_use]
    pub const fn as_array(&self) -> &[u32; ALPHABET_SIZE] {
        &self.counts
    }

    /// Whether every letter required here is available in `available`
    ///
    /// Comparison is "available >= required" per letter, never equality.
    #[must_use]
    pub fn is_subset_of(&self, available: &Self) -> bool {
        self.counts
            .iter()
            .zip(&available.counts)
            .all(|(&required, &have)| required <= have)
    }

    /// Add one occurrence of the letter at `index`
    #[inline]
    pub fn increment(&mut self, index: usize) {
        if self.counts[index] == 0 {
            self.distinct += 1;
        }
        self.counts[index] += 1;
        self.total += 1;
    }

    /// Remove one occurrence of the letter at `index`
    ///
    /// # Panics
    /// Panics in debug builds if the letter is absent
    #[inline]
    pub fn decrement(&mut self, index: usize) {
        debug_assert!(self.counts[index] > 0, "letter budget underflow");
        self.counts[index] -= 1;
        if self.counts[index] == 0 {
            self.distinct -= 1;
        }
        self.total -= 1;
    }
}

impl fmt::Display for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, &count) in self.counts.iter().enumerate() {
            for _ in 0..count {
                write!(f, "{}", index_letter(index))?;
            }
        }
        Ok(())
    }
}

/// Count the letters of `word`, returning the multiset and its distinct-letter count
#[must_use]
pub fn count_letters(word: &str) -> (LetterCounts, usize) {
    let counts = LetterCounts::from_word(word);
    let distinct = counts.distinct();
    (counts, distinct)
}
