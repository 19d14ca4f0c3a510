//! Solver output types

use rustc_hash::FxHashSet;

/// A dictionary word traced through the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordMatch {
    /// Lowercase word
    pub value: String,
    /// Cells spelling the word, first letter first
    pub cell_indexes: Vec<usize>,
    /// Sum of the letter points of `value`
    pub points: u32,
}

/// Every match of one solve, best score first
///
/// Matches with equal points stay in the order the search found them. The same word
/// reached through different cells appears once per path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    matches: Vec<WordMatch>,
}

impl ResultSet {
    /// Rank matches given in discovery order
    #[must_use]
    pub fn from_discovered(mut matches: Vec<WordMatch>) -> Self {
        // Stable: ties keep discovery order
        matches.sort_by(|a, b| b.points.cmp(&a.points));
        Self { matches }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Highest scoring match, if any
    #[must_use]
    pub fn best(&self) -> Option<&WordMatch> {
        self.matches.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordMatch> {
        self.matches.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[WordMatch] {
        &self.matches
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<WordMatch> {
        self.matches
    }

    /// Unique word values, in ranked order of first appearance
    #[must_use]
    pub fn distinct_values(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.matches
            .iter()
            .map(|m| m.value.as_str())
            .filter(|v| seen.insert(*v))
            .collect()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a WordMatch;
    type IntoIter = std::slice::Iter<'a, WordMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}
