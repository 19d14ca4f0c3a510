//! Letter grid
//!
//! A grid is a fixed shape plus one `Option<Letter>` per cell. `None` marks a cell
//! that holds no letter; the search treats such a cell as a wall.

use super::letter::{Letter, LetterError};
use super::shape::GridShape;
use rand::Rng;
use std::fmt;
use thiserror::Error;

/// Characters accepted as an empty cell when parsing
const EMPTY_MARKERS: &[char] = &['.', '_', '-', '?', '*'];

/// Error type for grid construction and parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid {shape} needs {expected} cells, got {actual}")]
    CellCount {
        shape: GridShape,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid cell {index}: {source}")]
    InvalidCell {
        index: usize,
        #[source]
        source: LetterError,
    },
}

/// A rectangular grid of optional letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    shape: GridShape,
    cells: Vec<Option<Letter>>,
}

impl Grid {
    /// Create a grid from its cells in row-major order
    ///
    /// # Errors
    /// Returns `GridError::CellCount` if `cells` does not hold exactly `rows * cols` entries.
    pub fn new(shape: GridShape, cells: Vec<Option<Letter>>) -> Result<Self, GridError> {
        if cells.len() != shape.len() {
            return Err(GridError::CellCount {
                shape,
                expected: shape.len(),
                actual: cells.len(),
            });
        }
        Ok(Self { shape, cells })
    }

    /// Create a grid with every cell empty
    #[must_use]
    pub fn empty(shape: GridShape) -> Self {
        Self {
            shape,
            cells: vec![None; shape.len()],
        }
    }

    /// Create a grid with a uniformly random letter in every cell
    #[must_use]
    pub fn random<R: Rng + ?Sized>(shape: GridShape, rng: &mut R) -> Self {
        let cells = (0..shape.len())
            .map(|_| Some(Letter::from_index(rng.random_range(0..Letter::COUNT))))
            .collect();
        Self { shape, cells }
    }

    /// Parse a grid from text
    ///
    /// Whitespace and `/` are ignored, so rows may be separated by newlines, spaces or
    /// slashes. Letters are case-insensitive; `.`, `_`, `-`, `?` and `*` mark an empty cell.
    ///
    /// # Errors
    /// Returns `GridError::InvalidCell` for any other character, or
    /// `GridError::CellCount` if the number of cells does not match `shape`.
    ///
    /// # Examples
    /// ```
    /// use word_grid_solver::core::{Grid, GridShape};
    ///
    /// let shape = GridShape::new(2, 3).unwrap();
    /// let grid = Grid::parse(shape, "CRA/.NE").unwrap();
    /// assert_eq!(grid.letter(3), None);
    /// assert_eq!(grid.letter(4).unwrap().as_upper(), 'N');
    /// ```
    pub fn parse(shape: GridShape, text: &str) -> Result<Self, GridError> {
        let cells = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .enumerate()
            .map(|(index, ch)| {
                if EMPTY_MARKERS.contains(&ch) {
                    Ok(None)
                } else {
                    Letter::new(ch)
                        .map(Some)
                        .map_err(|source| GridError::InvalidCell { index, source })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(shape, cells)
    }

    #[inline]
    #[must_use]
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Letter at `index`, or `None` for an empty cell
    ///
    /// # Panics
    /// Panics if `index` is outside the grid
    #[inline]
    #[must_use]
    pub fn letter(&self, index: usize) -> Option<Letter> {
        self.cells[index]
    }

    /// Replace the content of a cell
    ///
    /// # Panics
    /// Panics if `index` is outside the grid
    pub fn set(&mut self, index: usize, letter: Option<Letter>) {
        self.cells[index] = letter;
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// All cells in row-major order
    #[must_use]
    pub fn cells(&self) -> &[Option<Letter>] {
        &self.cells
    }

    /// Number of cells holding a letter
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl fmt::Display for Grid {
    /// Rows joined by `/`, empty cells as `.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(self.shape.cols()).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in chunk {
                write!(f, "{}", cell.map_or('.', Letter::as_upper))?;
            }
        }
        Ok(())
    }
}
