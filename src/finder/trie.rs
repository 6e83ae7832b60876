//! Prefix-tree index
//!
//! A 26-ary trie stored as an arena of nodes. Each node knows whether the path
//! from the root spells a complete word and carries the cumulative score of
//! that path.
//!
//! # Search
//!
//! The query letters become a live budget. Descending into a child spends one
//! of its letter; returning restores it, so the same budget is explored along
//! every sibling branch. A node with an empty budget is not descended further.
//! The work done is bounded by the branching of the stored vocabulary rather
//! than by the number of letter permutations.

use super::{IndexStats, WordFinder};
use crate::core::letters::valid_letters;
use crate::core::{
    ALPHABET_SIZE, LetterCounts, LetterPoints, ScoredWord, index_letter, letter_index, rank,
};

/// Position of a node in the arena
type NodeId = u32;

const ROOT: NodeId = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    children: [Option<NodeId>; ALPHABET_SIZE],
    is_word: bool,
    total_points: i32,
}

impl Node {
    const fn new(total_points: i32) -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            is_word: false,
            total_points,
        }
    }
}

/// Prefix-tree word index
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    points: LetterPoints,
    words_added: usize,
    chars_added: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new(LetterPoints::default())
    }
}

impl Trie {
    /// Create an empty trie scoring with `points`
    #[must_use]
    pub fn new(points: LetterPoints) -> Self {
        Self {
            nodes: vec![Node::new(0)],
            points,
            words_added: 0,
            chars_added: 0,
        }
    }

    /// The scoring table in use
    #[must_use]
    pub const fn points(&self) -> &LetterPoints {
        &self.points
    }

    /// Discard every word and the scoring table
    ///
    /// The trie is left exactly as [`Trie::default`] builds it.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Number of allocated nodes, root included
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no word has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Whether `word` was added as a complete word
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word)
            .is_some_and(|id| id != ROOT && self.node(id).is_word)
    }

    /// Cumulative score of the node reached by `prefix`, `None` if absent
    #[must_use]
    pub fn prefix_score(&self, prefix: &str) -> Option<i32> {
        self.walk(prefix).map(|id| self.node(id).total_points)
    }

    fn walk(&self, path: &str) -> Option<NodeId> {
        valid_letters(path).try_fold(ROOT, |id, c| self.node(id).children[letter_index(c)])
    }

    #[inline]
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    fn child_or_insert(&mut self, id: NodeId, index: usize) -> NodeId {
        if let Some(child) = self.nodes[id as usize].children[index] {
            return child;
        }

        debug_assert!(self.nodes.len() < NodeId::MAX as usize);
        let child = self.nodes.len() as NodeId;
        self.nodes.push(Node::new(0));
        self.nodes[id as usize].children[index] = Some(child);
        child
    }

    /// Depth-first search from `id`, spending `budget` one letter per level
    fn search(
        &self,
        id: NodeId,
        budget: &mut LetterCounts,
        buffer: &mut String,
        matches: &mut Vec<ScoredWord>,
    ) {
        let node = self.node(id);

        if node.is_word {
            matches.push(ScoredWord::new(buffer.as_str(), node.total_points));
        }

        if budget.is_empty() {
            return;
        }

        for (index, child) in node.children.iter().enumerate() {
            let Some(child) = *child else { continue };
            if budget.get_index(index).is_none() {
                continue;
            }

            budget.decrement(index);
            buffer.push(index_letter(index));

            self.search(child, budget, buffer, matches);

            buffer.pop();
            budget.increment(index);
        }
    }
}

impl WordFinder for Trie {
    fn add(&mut self, word: &str) -> &mut Self {
        tracing::trace!(word, "adding word");

        self.words_added += 1;
        self.chars_added += word.chars().count();

        let lowercase = word.to_lowercase();
        let mut id = ROOT;
        let mut total_points = 0;

        for c in valid_letters(&lowercase) {
            let index = letter_index(c);
            id = self.child_or_insert(id, index);

            // Purely a function of the path, so rewriting it for a shared prefix is idempotent
            total_points += i32::from(self.points.at(index));
            self.nodes[id as usize].total_points = total_points;
        }

        if id != ROOT {
            self.nodes[id as usize].is_word = true;
        }

        self
    }

    fn find_scored(&self, letters: &str) -> Vec<ScoredWord> {
        if letters.is_empty() {
            return Vec::new();
        }

        let mut budget = LetterCounts::from_word(letters);
        let mut buffer = String::with_capacity(budget.total() as usize);
        let mut matches = Vec::new();

        // The root never spells a word, so start the search from it directly
        self.search(ROOT, &mut budget, &mut buffer, &mut matches);

        rank(&mut matches);

        tracing::debug!(letters, found = matches.len(), "trie search");

        matches
    }

    fn stats(&self) -> IndexStats {
        IndexStats {
            words_added: self.words_added,
            chars_added: self.chars_added,
            stored: self.node_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_with(words: &[&str]) -> Trie {
        let mut trie = Trie::new(LetterPoints::standard());
        for word in words {
            trie.add(word);
        }
        trie
    }

    fn path_ids(trie: &Trie, word: &str) -> Vec<NodeId> {
        let mut id = ROOT;
        let mut ids = Vec::new();
        for c in valid_letters(word) {
            id = trie.node(id).children[letter_index(c)].unwrap();
            ids.push(id);
        }
        ids
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::default();
        let root = trie.node(ROOT);

        assert!(trie.is_empty());
        assert!(!root.is_word);
        assert_eq!(root.total_points, 0);
        assert!(root.children.iter().all(Option::is_none));
    }

    #[test]
    fn add_empty_word() {
        let mut trie = Trie::new(LetterPoints::standard());
        trie.add("");

        assert!(trie.is_empty());
        assert!(!trie.node(ROOT).is_word);
    }

    #[test]
    fn add_word_without_valid_letters_is_noop() {
        let mut trie = trie_with(&["hat"]);
        let before = trie.node_count();

        trie.add("1234").add("--");

        assert_eq!(trie.node_count(), before);
        assert!(!trie.node(ROOT).is_word);
        assert!(trie.find_matches("1234").is_empty());
    }

    #[test]
    fn add_one_word() {
        let trie = trie_with(&["juana"]);
        let points = LetterPoints::standard();

        let ids = path_ids(&trie, "juana");
        assert_eq!(ids.len(), 5);
        assert_eq!(trie.node_count(), 6);

        let mut total = 0;
        for (i, (c, &id)) in "juana".chars().zip(&ids).enumerate() {
            total += i32::from(points.of(c));
            let node = trie.node(id);
            assert_eq!(node.total_points, total);
            assert_eq!(node.is_word, i == 4);
        }
    }

    #[test]
    fn add_two_words_no_shared_prefix() {
        let trie = trie_with(&["juana", "hey"]);
        let root = trie.node(ROOT);

        let used: Vec<usize> = root
            .children
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.map(|_| i))
            .collect();
        assert_eq!(used, [letter_index('h'), letter_index('j')]);

        assert!(trie.contains("juana"));
        assert!(trie.contains("hey"));
        assert!(!trie.contains("he"));
        assert_eq!(trie.prefix_score("hey"), Some(9));
    }

    #[test]
    fn add_two_words_sharing_prefix() {
        let trie = trie_with(&["hell", "hello"]);

        assert_eq!(trie.node_count(), 6);
        assert!(trie.contains("hell"));
        assert!(trie.contains("hello"));
        assert!(!trie.contains("hel"));

        // "hell" is both a complete word and a prefix of "hello"
        let ids = path_ids(&trie, "hello");
        assert!(trie.node(ids[3]).is_word);
        assert!(trie.node(ids[3]).children[letter_index('o')].is_some());
    }

    #[test]
    fn readding_word_keeps_cumulative_scores() {
        let mut trie = trie_with(&["hello"]);
        let before: Vec<i32> = path_ids(&trie, "hello")
            .into_iter()
            .map(|id| trie.node(id).total_points)
            .collect();

        trie.add("hello").add("help").add("he");

        let after: Vec<i32> = path_ids(&trie, "hello")
            .into_iter()
            .map(|id| trie.node(id).total_points)
            .collect();
        assert_eq!(before, after);
        assert_eq!(after, [4, 5, 6, 7, 8]);
    }

    #[test]
    fn add_skips_invalid_characters() {
        let trie = trie_with(&["It's"]);

        assert!(trie.contains("its"));
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.find_matches("tis"), ["its"]);
    }

    #[test]
    fn find_words_that_exist() {
        let trie = trie_with(&["a", "ah", "at", "ha", "hat", "juana"]);

        let results = trie.find_matches("tha");
        assert_eq!(results, ["hat", "ah", "ha", "at", "a"]);
    }

    #[test]
    fn find_words_with_repeated_letter() {
        let trie = trie_with(&["he", "hell", "hello", "how", "yell", "yellow"]);

        let results = trie.find_matches("hello");
        assert_eq!(results, ["hello", "hell", "he"]);
    }

    #[test]
    fn find_words_needing_more_repeats_than_available() {
        let trie = trie_with(&["hee", "lad"]);
        assert!(trie.find_matches("hel").is_empty());
    }

    #[test]
    fn find_words_that_dont_exist() {
        let trie = trie_with(&["he", "hell", "hello", "how", "yell", "yellow"]);
        assert!(trie.find_matches("xxx").is_empty());
    }

    #[test]
    fn find_words_for_empty_letters() {
        let trie = trie_with(&["he", "hell", "hello"]);
        assert!(trie.find_matches("").is_empty());
    }

    #[test]
    fn find_does_not_repeat_duplicate_words() {
        let trie = trie_with(&["hat", "hat"]);
        assert_eq!(trie.find_matches("aht"), ["hat"]);
    }

    #[test]
    fn find_restores_budget_between_siblings() {
        let trie = trie_with(&["ab", "ba", "aab"]);
        assert_eq!(trie.find_matches("ab"), ["ab", "ba"]);
        assert_eq!(trie.find_matches("aab"), ["aab", "ab", "ba"]);
    }

    #[test]
    fn find_scored_reports_path_scores() {
        let trie = trie_with(&["quiz", "qi"]);
        let scored = trie.find_scored("zqiu");
        assert_eq!(
            scored,
            [ScoredWord::new("quiz", 22), ScoredWord::new("qi", 11)]
        );
    }

    #[test]
    fn reset_clears_words_and_points() {
        let mut trie = trie_with(&["hat", "hello"]);
        trie.reset();

        assert!(trie.is_empty());
        assert_eq!(*trie.points(), LetterPoints::ZERO);
        assert!(trie.find_matches("hat").is_empty());
        assert_eq!(trie.stats(), IndexStats { stored: 1, ..IndexStats::default() });

        trie.add("hat");
        assert_eq!(trie.find_scored("hat"), [ScoredWord::new("hat", 0)]);
    }

    #[test]
    fn stats_count_nodes() {
        let trie = trie_with(&["he", "hell", ""]);
        let stats = trie.stats();
        assert_eq!(stats.words_added, 3);
        assert_eq!(stats.chars_added, 6);
        assert_eq!(stats.stored, 5);
    }
}
