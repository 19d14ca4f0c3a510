//! Grid geometry and the adjacency model
//!
//! Cells are addressed by a row-major linear index. Two cells are adjacent when they
//! share an edge or a corner (king moves), clipped at the grid boundary.

use std::fmt;
use thiserror::Error;

/// Error type for invalid grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Grid must have at least one row and one column, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },

    #[error("Grid of {rows}x{cols} cells is too large to address")]
    TooLarge { rows: usize, cols: usize },
}

/// Fixed row/column dimensions of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

impl GridShape {
    /// Create a shape with the given dimensions
    ///
    /// # Errors
    /// Returns `ShapeError::Empty` if either dimension is zero and
    /// `ShapeError::TooLarge` if the cell count overflows `usize`.
    pub const fn new(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        if rows == 0 || cols == 0 {
            return Err(ShapeError::Empty { rows, cols });
        }
        if rows.checked_mul(cols).is_none() {
            return Err(ShapeError::TooLarge { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    #[inline]
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Always false: a shape has at least one cell
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        false
    }

    /// Convert a linear index to `(row, col)`
    ///
    /// # Panics
    /// Panics if `index` is outside the grid
    #[must_use]
    pub fn coordinates(self, index: usize) -> (usize, usize) {
        self.check_index(index);
        (index / self.cols, index % self.cols)
    }

    /// Convert `(row, col)` to a linear index, or `None` if outside the grid
    #[must_use]
    pub const fn index(self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Indices adjacent to `index`, in the order N, NW, NE, S, SW, SE, W, E
    ///
    /// Directions that would leave the grid are skipped, so a corner of a grid with at
    /// least 2 rows and 2 columns yields 3 neighbors, an edge cell 5 and an interior cell 8.
    /// The order is fixed because it decides the order in which the search discovers words.
    ///
    /// # Panics
    /// Panics if `index` is outside the grid
    ///
    /// # Examples
    /// ```
    /// use word_grid_solver::core::GridShape;
    ///
    /// let shape = GridShape::new(3, 3).unwrap();
    /// assert_eq!(shape.neighbors(0), vec![3, 4, 1]);
    /// assert_eq!(shape.neighbors(4).len(), 8);
    /// ```
    #[must_use]
    pub fn neighbors(self, index: usize) -> Vec<usize> {
        self.check_index(index);

        let cols = self.cols;
        let on_top = index < cols;
        let on_bottom = index >= cols * (self.rows - 1);
        let on_left = index % cols == 0;
        let on_right = index % cols == cols - 1;

        let mut indexes = Vec::with_capacity(8);
        if !on_top {
            indexes.push(index - cols);
            if !on_left {
                indexes.push(index - cols - 1);
            }
            if !on_right {
                indexes.push(index - cols + 1);
            }
        }
        if !on_bottom {
            indexes.push(index + cols);
            if !on_left {
                indexes.push(index + cols - 1);
            }
            if !on_right {
                indexes.push(index + cols + 1);
            }
        }
        if !on_left {
            indexes.push(index - 1);
        }
        if !on_right {
            indexes.push(index + 1);
        }
        indexes
    }

    fn check_index(self, index: usize) {
        assert!(
            index < self.len(),
            "cell index {index} out of range for {self} grid"
        );
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
