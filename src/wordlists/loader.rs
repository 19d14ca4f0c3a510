//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::solver::WordList;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load a word list from a file
///
/// One word per line. Blank lines and lines starting with `#` are ignored, entries are
/// lowercased, and entries containing anything other than letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_grid_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse word list text, one word per line
#[must_use]
pub fn parse_word_list(content: &str) -> WordList {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// The embedded default dictionary as a word list
///
/// # Examples
/// ```
/// use word_grid_solver::wordlists::loader::default_word_list;
/// use word_grid_solver::wordlists::DICTIONARY;
///
/// let words = default_word_list();
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn default_word_list() -> WordList {
    WordList::from_slice(crate::wordlists::DICTIONARY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Dictionary;
    use std::io::Write;

    #[test]
    fn parse_skips_comments_and_blanks() {
        let words = parse_word_list("# header\n\ncrane\n  Slate  \n# trailing\n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("crane"));
        assert!(words.contains("slate"));
    }

    #[test]
    fn parse_skips_unspellable_entries() {
        let words = parse_word_list("crane\ndon't\nx-ray\nnaïve\n");
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rain\nTRAIN\n\nbrain").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words.len(), 3);
        assert!(words.contains("train"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn default_word_list_has_every_embedded_word() {
        let words = default_word_list();
        assert_eq!(words.len(), crate::wordlists::DICTIONARY_COUNT);
        assert!(words.contains("crane"));
    }
}
