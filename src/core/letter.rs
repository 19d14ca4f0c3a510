//! Grid letter representation
//!
//! A `Letter` is one of the 26 uppercase ASCII letters. Construction is the only
//! place validation happens, so everything downstream can treat the alphabet as closed.

use std::fmt;
use thiserror::Error;

/// Error type for invalid letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("'{0}' is not a letter from A to Z")]
    NotAlphabetic(char),
}

/// A single uppercase letter `A`-`Z` held by a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    /// Create a letter from a character, normalizing case
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything other than ASCII `a`-`z` / `A`-`Z`.
    ///
    /// # Examples
    /// ```
    /// use word_grid_solver::core::Letter;
    ///
    /// let letter = Letter::new('q').unwrap();
    /// assert_eq!(letter.as_upper(), 'Q');
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self(ch.to_ascii_uppercase() as u8))
        } else {
            Err(LetterError::NotAlphabetic(ch))
        }
    }

    /// Create a letter from its alphabet position (0 = `A`)
    ///
    /// # Panics
    /// Panics if `index >= 26`
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        assert!(index < Self::COUNT, "letter index {index} out of range");
        Self(b'A' + index as u8)
    }

    /// Alphabet position (0 = `A`, 25 = `Z`)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    /// Uppercase form, as shown on the grid
    #[inline]
    #[must_use]
    pub const fn as_upper(self) -> char {
        self.0 as char
    }

    /// Lowercase form, as used for dictionary lookups
    #[inline]
    #[must_use]
    pub const fn as_lower(self) -> char {
        self.0.to_ascii_lowercase() as char
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::new(ch)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_upper())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_normalizes_case() {
        assert_eq!(Letter::new('a').unwrap(), Letter::new('A').unwrap());
        assert_eq!(Letter::new('z').unwrap().as_upper(), 'Z');
        assert_eq!(Letter::new('Z').unwrap().as_lower(), 'z');
    }

    #[test]
    fn letter_rejects_non_alphabetic() {
        assert_eq!(Letter::new('1'), Err(LetterError::NotAlphabetic('1')));
        assert!(Letter::new(' ').is_err());
        assert!(Letter::new('é').is_err());
        assert!(Letter::new('.').is_err());
    }

    #[test]
    fn letter_index_round_trips() {
        for i in 0..Letter::COUNT {
            assert_eq!(Letter::from_index(i).index(), i);
        }
        assert_eq!(Letter::new('a').unwrap().index(), 0);
        assert_eq!(Letter::new('z').unwrap().index(), 25);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn letter_from_index_out_of_range_panics() {
        let _ = Letter::from_index(26);
    }

    #[test]
    fn letter_display() {
        assert_eq!(format!("{}", Letter::new('k').unwrap()), "K");
    }
}
