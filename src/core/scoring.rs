//! Letter point table and word scoring

use super::letter::Letter;
use std::collections::BTreeMap;
use thiserror::Error;

/// Error type for scoring and point table construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("'{0}' has no point value (expected a lowercase letter a-z)")]
    UnknownLetter(char),

    #[error("Letter '{0}' must be worth at least one point")]
    ZeroPoints(char),
}

/// Point value of each letter `a`-`z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPoints {
    points: [u32; Letter::COUNT],
}

impl LetterPoints {
    /// Standard point values, a through z
    pub const STANDARD: [u32; Letter::COUNT] = [
        1, 4, 5, 3, 1, 5, 3, 4, 1, 7, 6, 3, 4, 2, 1, 4, 8, 2, 2, 2, 4, 5, 5, 7, 4, 8,
    ];

    /// Create a table from 26 values ordered a through z
    ///
    /// # Errors
    /// Returns `ScoreError::ZeroPoints` if any letter is worth nothing.
    pub fn new(points: [u32; Letter::COUNT]) -> Result<Self, ScoreError> {
        if let Some(i) = points.iter().position(|&p| p == 0) {
            return Err(ScoreError::ZeroPoints(Letter::from_index(i).as_lower()));
        }
        Ok(Self { points })
    }

    /// Create a table from standard values with some letters overridden
    ///
    /// Keys are case-insensitive.
    ///
    /// # Errors
    /// Returns `ScoreError::UnknownLetter` for a key outside a-z, or
    /// `ScoreError::ZeroPoints` for a zero value.
    pub fn from_map(overrides: &BTreeMap<char, u32>) -> Result<Self, ScoreError> {
        let mut points = Self::STANDARD;
        for (&ch, &value) in overrides {
            let letter = Letter::new(ch).map_err(|_| ScoreError::UnknownLetter(ch))?;
            points[letter.index()] = value;
        }
        Self::new(points)
    }

    /// Points for a single letter
    #[inline]
    #[must_use]
    pub const fn letter(&self, letter: Letter) -> u32 {
        self.points[letter.index()]
    }

    /// Sum of the letter points of a lowercase word
    ///
    /// # Errors
    /// Returns `ScoreError::UnknownLetter` on the first character outside `a`-`z`.
    ///
    /// # Examples
    /// ```
    /// use word_grid_solver::core::LetterPoints;
    ///
    /// let table = LetterPoints::default();
    /// assert_eq!(table.points("crane").unwrap(), 11);
    /// assert!(table.points("Crane").is_err());
    /// ```
    pub fn points(&self, word: &str) -> Result<u32, ScoreError> {
        word.chars().try_fold(0, |total, ch| {
            if ch.is_ascii_lowercase() {
                Ok(total + self.points[(ch as u8 - b'a') as usize])
            } else {
                Err(ScoreError::UnknownLetter(ch))
            }
        })
    }
}

impl Default for LetterPoints {
    fn default() -> Self {
        Self {
            points: Self::STANDARD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_values() {
        let table = LetterPoints::default();
        let value = |c| table.letter(Letter::new(c).unwrap());
        assert_eq!(value('a'), 1);
        assert_eq!(value('c'), 5);
        assert_eq!(value('j'), 7);
        assert_eq!(value('q'), 8);
        assert_eq!(value('z'), 8);
    }

    #[test]
    fn points_sums_letters() {
        let table = LetterPoints::default();
        // c5 r2 a1 n2 e1
        assert_eq!(table.points("crane"), Ok(11));
        assert_eq!(table.points("quiz"), Ok(8 + 4 + 1 + 8));
        assert_eq!(table.points(""), Ok(0));
    }

    #[test]
    fn points_rejects_unknown_characters() {
        let table = LetterPoints::default();
        assert_eq!(table.points("CRANE"), Err(ScoreError::UnknownLetter('C')));
        assert_eq!(table.points("can't"), Err(ScoreError::UnknownLetter('\'')));
    }

    #[test]
    fn from_map_overrides_standard() {
        let overrides = BTreeMap::from([('q', 10), ('Z', 12)]);
        let table = LetterPoints::from_map(&overrides).unwrap();
        assert_eq!(table.points("q"), Ok(10));
        assert_eq!(table.points("z"), Ok(12));
        assert_eq!(table.points("a"), Ok(1));
    }

    #[test]
    fn from_map_rejects_bad_entries() {
        let bad_key = BTreeMap::from([('1', 3)]);
        assert_eq!(
            LetterPoints::from_map(&bad_key),
            Err(ScoreError::UnknownLetter('1'))
        );

        let zero = BTreeMap::from([('e', 0)]);
        assert_eq!(
            LetterPoints::from_map(&zero),
            Err(ScoreError::ZeroPoints('e'))
        );
    }
}
