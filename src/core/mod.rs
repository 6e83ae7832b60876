//! Core domain types for word finding
//!
//! Letter utilities, the scoring table and the scored match type.
//! Everything here is pure and free of I/O.

pub mod letters;
mod scoring;
mod word;

pub use letters::{
    ALPHABET_SIZE, LetterCounts, count_letters, index_letter, is_valid_letter, letter_index,
};
pub use scoring::{LetterPoints, ScoringError};
pub use word::{ScoredWord, rank};
