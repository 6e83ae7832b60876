//! Vocabulary sources
//!
//! Provides the embedded default vocabulary and loaders for line-delimited word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{LoadError, load_from_file, load_from_reader, load_from_slice, load_vocabulary};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty(), "Embedded list contains a blank entry");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_sorted_and_unique() {
        assert!(WORDS.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn expected_count() {
        assert_eq!(WORDS_COUNT, 596, "Expected 596 embedded words");
    }
}
