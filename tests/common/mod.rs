//! Shared fixtures for integration tests.

#![allow(dead_code)]

use word_finder::core::LetterPoints;
use word_finder::finder::{FinderType, LetterProfileIndex, Trie, WordFinder};

/// Small vocabulary where "tha" reaches everything but "juana".
pub const BASIC: &[&str] = &["a", "ah", "at", "ha", "hat", "juana"];

/// Vocabulary exercising repeated letters.
pub const REPEATS: &[&str] = &["he", "hell", "hello", "how", "yell", "yellow"];

/// Engine names accepted by `FinderType::from_name`.
pub const ENGINES: [&str; 2] = ["trie", "profile"];

pub fn trie(words: &[&str]) -> Trie {
    let mut trie = Trie::new(LetterPoints::standard());
    for word in words {
        trie.add(word);
    }
    trie
}

pub fn profile(words: &[&str]) -> LetterProfileIndex {
    let mut index = LetterProfileIndex::new(LetterPoints::standard());
    for word in words {
        index.add(word);
    }
    index
}

/// Every engine loaded with `words`, scoring with standard tile values.
pub fn all_engines(words: &[&str]) -> Vec<FinderType> {
    ENGINES
        .iter()
        .map(|name| {
            let mut finder = FinderType::from_name(name, LetterPoints::standard());
            for word in words {
                finder.add(word);
            }
            finder
        })
        .collect()
}

/// Sorted copy of a result list, for set comparisons.
pub fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}
