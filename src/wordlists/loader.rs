//! Vocabulary loading
//!
//! Feeds a line-delimited word source into any [`WordFinder`]: one word per
//! line, arbitrary case, blank lines ignored.

use super::embedded::WORDS;
use crate::finder::WordFinder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a vocabulary source
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("vocabulary file {} cannot be opened", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed reading vocabulary after {loaded} words")]
    Read {
        loaded: usize,
        #[source]
        source: io::Error,
    },
}

/// Add every non-blank line of `reader` to `finder`
///
/// Returns the number of words added.
///
/// # Errors
///
/// Returns `LoadError::Read` if a line cannot be read. Words added before the
/// failure stay in the index.
///
/// # Examples
/// ```
/// use word_finder::core::LetterPoints;
/// use word_finder::finder::{Trie, WordFinder};
/// use word_finder::wordlists::load_from_reader;
///
/// let mut trie = Trie::new(LetterPoints::standard());
/// let loaded = load_from_reader(&mut trie, "hat\n\nAH\n".as_bytes()).unwrap();
/// assert_eq!(loaded, 2);
/// assert_eq!(trie.find_matches("tha"), ["hat", "ah"]);
/// ```
pub fn load_from_reader<F, R>(finder: &mut F, reader: R) -> Result<usize, LoadError>
where
    F: WordFinder,
    R: BufRead,
{
    let mut loaded = 0;

    for line in reader.lines() {
        let line = line.map_err(|source| LoadError::Read { loaded, source })?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        finder.add(word);
        loaded += 1;
    }

    tracing::info!(words = loaded, "loaded vocabulary");

    Ok(loaded)
}

/// Add every non-blank line of the file at `path` to `finder`
///
/// # Errors
///
/// Returns `LoadError::Open` if the file cannot be opened and
/// `LoadError::Read` if reading fails part way.
pub fn load_from_file<F, P>(finder: &mut F, path: P) -> Result<usize, LoadError>
where
    F: WordFinder,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "reading vocabulary file");

    load_from_reader(finder, BufReader::new(file))
}

/// Add an in-memory word list to `finder`, skipping blank entries
///
/// # Examples
/// ```
/// use word_finder::core::LetterPoints;
/// use word_finder::finder::{LetterProfileIndex, WordFinder};
/// use word_finder::wordlists::{WORDS, load_from_slice};
///
/// let mut index = LetterProfileIndex::new(LetterPoints::standard());
/// let loaded = load_from_slice(&mut index, WORDS);
/// assert_eq!(loaded, WORDS.len());
/// ```
pub fn load_from_slice<F: WordFinder>(finder: &mut F, words: &[&str]) -> usize {
    let mut loaded = 0;
    for word in words.iter().map(|w| w.trim()).filter(|w| !w.is_empty()) {
        finder.add(word);
        loaded += 1;
    }
    loaded
}

/// Fill `finder` from the file at `location`, or from the embedded
/// vocabulary when no location is configured
///
/// # Errors
///
/// Returns `LoadError` if the configured file cannot be read.
pub fn load_vocabulary<F: WordFinder>(
    finder: &mut F,
    location: Option<&Path>,
) -> Result<usize, LoadError> {
    match location {
        Some(path) => load_from_file(finder, path),
        None => {
            let loaded = load_from_slice(finder, WORDS);
            tracing::info!(words = loaded, "loaded embedded vocabulary");
            Ok(loaded)
        }
    }
}
