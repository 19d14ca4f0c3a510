//! Word lists for grid solving
//!
//! Provides the embedded default dictionary and loading of custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_entries_are_lowercase_letters() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }

    #[test]
    fn dictionary_covers_playable_lengths() {
        // Something to find at every length of the default 4..=7 range
        for len in 4..=7 {
            assert!(
                DICTIONARY.iter().any(|w| w.len() == len),
                "no {len}-letter words"
            );
        }
    }
}
