//! Cross-engine comparison command
//!
//! Runs the same queries on both engines and checks that they agree on the
//! set of matched words and that each returns its words in score order.

use crate::core::ScoredWord;
use crate::finder::{LetterProfileIndex, Trie, WordFinder};
use std::collections::BTreeSet;

/// Outcome of one query on both engines
#[derive(Debug, Clone)]
pub struct QueryComparison {
    pub letters: String,
    pub trie: Vec<ScoredWord>,
    pub profile: Vec<ScoredWord>,
    pub only_in_trie: Vec<String>,
    pub only_in_profile: Vec<String>,
    pub trie_ordered: bool,
    pub profile_ordered: bool,
}

impl QueryComparison {
    /// Both engines matched the same words
    #[must_use]
    pub fn same_words(&self) -> bool {
        self.only_in_trie.is_empty() && self.only_in_profile.is_empty()
    }

    /// Same words, each list in descending score order
    #[must_use]
    pub fn agrees(&self) -> bool {
        self.same_words() && self.trie_ordered && self.profile_ordered
    }
}

/// Outcome of a batch of queries
#[derive(Debug, Clone)]
pub struct CompareResult {
    pub queries: Vec<QueryComparison>,
}

impl CompareResult {
    #[must_use]
    pub fn all_agree(&self) -> bool {
        self.queries.iter().all(QueryComparison::agrees)
    }

    #[must_use]
    pub fn disagreements(&self) -> usize {
        self.queries.iter().filter(|q| !q.agrees()).count()
    }
}

/// Whether no match is followed by a higher-scoring one
#[must_use]
pub fn is_score_ordered(matches: &[ScoredWord]) -> bool {
    matches.windows(2).all(|pair| pair[0].score >= pair[1].score)
}

/// Compare one query on both engines
pub fn compare_query(trie: &Trie, profile: &LetterProfileIndex, letters: &str) -> QueryComparison {
    let trie_matches = trie.find_scored(letters);
    let profile_matches = profile.find_scored(letters);

    let trie_words: BTreeSet<&str> = trie_matches.iter().map(ScoredWord::text).collect();
    let profile_words: BTreeSet<&str> = profile_matches.iter().map(ScoredWord::text).collect();

    let only_in_trie = trie_words
        .difference(&profile_words)
        .map(|w| (*w).to_string())
        .collect();
    let only_in_profile = profile_words
        .difference(&trie_words)
        .map(|w| (*w).to_string())
        .collect();

    QueryComparison {
        letters: letters.to_string(),
        trie_ordered: is_score_ordered(&trie_matches),
        profile_ordered: is_score_ordered(&profile_matches),
        trie: trie_matches,
        profile: profile_matches,
        only_in_trie,
        only_in_profile,
    }
}

/// Compare every query on both engines
pub fn compare_engines<S: AsRef<str>>(
    trie: &Trie,
    profile: &LetterProfileIndex,
    queries: &[S],
) -> CompareResult {
    let queries = queries
        .iter()
        .map(|letters| compare_query(trie, profile, letters.as_ref()))
        .collect::<Vec<_>>();

    let result = CompareResult { queries };
    if !result.all_agree() {
        tracing::warn!(
            disagreements = result.disagreements(),
            "engines disagree"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterPoints;
    use crate::wordlists::{WORDS, load_from_slice};

    fn engines(words: &[&str]) -> (Trie, LetterProfileIndex) {
        let mut trie = Trie::new(LetterPoints::standard());
        let mut profile = LetterProfileIndex::new(LetterPoints::standard());
        load_from_slice(&mut trie, words);
        load_from_slice(&mut profile, words);
        (trie, profile)
    }

    #[test]
    fn score_order_check() {
        assert!(is_score_ordered(&[]));
        assert!(is_score_ordered(&[
            ScoredWord::new("hat", 6),
            ScoredWord::new("ah", 5),
            ScoredWord::new("ha", 5),
        ]));
        assert!(!is_score_ordered(&[
            ScoredWord::new("a", 1),
            ScoredWord::new("hat", 6),
        ]));
    }

    #[test]
    fn engines_agree_on_embedded_vocabulary() {
        let (trie, profile) = engines(WORDS);
        let result = compare_engines(&trie, &profile, &["tha", "hello", "retains", "quiz", ""]);

        assert_eq!(result.queries.len(), 5);
        assert!(result.all_agree());
        assert_eq!(result.disagreements(), 0);
    }

    #[test]
    fn invalid_characters_make_engines_differ() {
        // The trie spells words with valid letters only; the profile keeps the original spelling
        let (trie, profile) = engines(&["it's"]);
        let comparison = compare_query(&trie, &profile, "tsi");

        assert!(!comparison.same_words());
        assert_eq!(comparison.only_in_trie, ["its"]);
        assert_eq!(comparison.only_in_profile, ["it's"]);
    }

    #[test]
    fn duplicates_do_not_count_as_disagreement() {
        let (trie, profile) = engines(&["hat", "hat"]);
        let comparison = compare_query(&trie, &profile, "hat");

        assert_eq!(comparison.trie.len(), 1);
        assert_eq!(comparison.profile.len(), 2);
        assert!(comparison.agrees());
    }
}
