//! Dictionary membership
//!
//! The solver only ever asks whether a lowercase string is a word. Anything that can
//! answer that question can serve as its dictionary.

use rustc_hash::FxHashSet;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// A membership test over lowercase words
pub trait Dictionary {
    /// Whether `word` (lowercase a-z) is a valid word
    fn contains(&self, word: &str) -> bool;
}

impl<S: BuildHasher> Dictionary for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Dictionary for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl Dictionary for [&str] {
    fn contains(&self, word: &str) -> bool {
        self.iter().any(|&w| w == word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// A hashed set of lowercase words
///
/// Entries are trimmed and lowercased on insertion; anything that is not made only of
/// letters a-z afterwards is skipped, since the grid can never spell it.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a word list from string slices
    ///
    /// # Examples
    /// ```
    /// use word_grid_solver::solver::{Dictionary, WordList};
    ///
    /// let words = WordList::from_slice(&["Crane", "slate", "not a word"]);
    /// assert_eq!(words.len(), 2);
    /// assert!(words.contains("crane"));
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        slice.iter().copied().collect()
    }

    /// Add a word, returning whether it was accepted and new
    pub fn insert(&mut self, word: &str) -> bool {
        let normalized = word.trim().to_ascii_lowercase();
        if normalized.is_empty() || !normalized.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }
        self.words.insert(normalized)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl<'a> FromIterator<&'a str> for WordList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.insert(word);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_normalizes_entries() {
        let list = WordList::from_slice(&["  Crane ", "SLATE", "crane"]);
        assert_eq!(list.len(), 2);
        assert!(list.contains("crane"));
        assert!(list.contains("slate"));
        assert!(!list.contains("Crane"));

        let mut sorted: Vec<&str> = list.iter().collect();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!["crane", "slate"]);
    }

    #[test]
    fn word_list_skips_unspellable_entries() {
        let mut list = WordList::new();
        assert!(!list.insert(""));
        assert!(!list.insert("can't"));
        assert!(!list.insert("two words"));
        assert!(!list.insert("café"));
        assert!(list.insert("cafe"));
        assert!(!list.insert("cafe"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn std_collections_are_dictionaries() {
        let hashed: HashSet<String> = ["rain".to_string()].into_iter().collect();
        let fx: FxHashSet<String> = ["rain".to_string()].into_iter().collect();
        let ordered: BTreeSet<String> = ["rain".to_string()].into_iter().collect();
        let slice: &[&str] = &["rain"];

        for dict in [
            &hashed as &dyn Dictionary,
            &fx as &dyn Dictionary,
            &ordered as &dyn Dictionary,
            &slice as &dyn Dictionary,
        ] {
            assert!(dict.contains("rain"));
            assert!(!dict.contains("rein"));
        }
    }

    #[test]
    fn references_forward_to_dictionary() {
        let list = WordList::from_slice(&["tree"]);
        let by_ref = &list;
        assert!(Dictionary::contains(&by_ref, "tree"));
    }
}
