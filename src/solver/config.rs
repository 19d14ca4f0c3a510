//! Solver configuration

use crate::core::{GridShape, LetterPoints};
use thiserror::Error;

/// Error type for invalid solver settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Minimum word length must be at least 1")]
    ZeroMinLength,

    #[error("Minimum word length {min} exceeds maximum {max}")]
    InvertedLengths { min: usize, max: usize },
}

/// What the search does on reaching a cell with no unvisited neighbor
///
/// The check runs before the cell is appended, so under `Skip` a word can never end
/// on such a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeadEndPolicy {
    /// Abandon the branch without testing the word
    #[default]
    Skip,
    /// Test the word like any other, so every simple path is considered
    Collect,
}

/// Settings fixed for the lifetime of a solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    shape: GridShape,
    min_length: usize,
    max_length: usize,
    letter_points: LetterPoints,
    dead_ends: DeadEndPolicy,
}

impl SolverConfig {
    pub const DEFAULT_ROWS: usize = 5;
    pub const DEFAULT_COLS: usize = 5;
    pub const DEFAULT_MIN_LENGTH: usize = 4;
    pub const DEFAULT_MAX_LENGTH: usize = 7;

    /// Create a configuration
    ///
    /// # Parameters
    /// - `shape`: Grid dimensions every solved grid must have
    /// - `min_length`: Shortest word collected (inclusive)
    /// - `max_length`: Longest word collected (inclusive), also the search depth limit
    /// - `letter_points`: Point table used to score matches
    ///
    /// The dead-end policy starts as [`DeadEndPolicy::Skip`].
    ///
    /// # Errors
    /// Returns `ConfigError` unless `1 <= min_length <= max_length`.
    pub fn new(
        shape: GridShape,
        min_length: usize,
        max_length: usize,
        letter_points: LetterPoints,
    ) -> Result<Self, ConfigError> {
        if min_length == 0 {
            return Err(ConfigError::ZeroMinLength);
        }
        if min_length > max_length {
            return Err(ConfigError::InvertedLengths {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            shape,
            min_length,
            max_length,
            letter_points,
            dead_ends: DeadEndPolicy::Skip,
        })
    }

    /// Replace the dead-end policy
    #[must_use]
    pub fn with_dead_ends(mut self, policy: DeadEndPolicy) -> Self {
        self.dead_ends = policy;
        self
    }

    #[inline]
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    #[inline]
    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[inline]
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    #[inline]
    #[must_use]
    pub const fn letter_points(&self) -> &LetterPoints {
        &self.letter_points
    }

    #[inline]
    #[must_use]
    pub const fn dead_ends(&self) -> DeadEndPolicy {
        self.dead_ends
    }

    /// Whether a word of `len` letters is collected
    #[inline]
    #[must_use]
    pub const fn accepts_length(&self, len: usize) -> bool {
        self.min_length <= len && len <= self.max_length
    }
}

impl Default for SolverConfig {
    /// 5x5 grid, words of 4 to 7 letters, standard points
    fn default() -> Self {
        Self {
            shape: GridShape::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLS)
                .unwrap_or_else(|_| unreachable!("default shape is non-empty")),
            min_length: Self::DEFAULT_MIN_LENGTH,
            max_length: Self::DEFAULT_MAX_LENGTH,
            letter_points: LetterPoints::default(),
            dead_ends: DeadEndPolicy::Skip,
        }
    }
}
