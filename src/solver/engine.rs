//! Path search engine
//!
//! Every cell starts an independent depth-first walk. A walk extends its word through
//! unvisited neighbors and tests it against the dictionary whenever its length is in
//! bounds. A cell with no unvisited neighbor ends its branch before being appended,
//! unless the configuration collects dead ends.
//!
//! The path and word live on one owned stack per walk: each branch pushes its cell
//! before descending and pops it afterwards, so siblings never see each other.

use super::config::{DeadEndPolicy, SolverConfig};
use super::dictionary::Dictionary;
use super::word_match::{ResultSet, WordMatch};
use crate::core::{Grid, GridShape, Letter};
use log::{debug, trace};
use rayon::prelude::*;
use thiserror::Error;

/// Error type for solve calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("Solver is configured for a {expected} grid but was given a {actual} grid")]
    ShapeMismatch {
        expected: GridShape,
        actual: GridShape,
    },
}

/// Word grid solver
///
/// Holds the configuration and a borrowed dictionary; grids are supplied per call.
pub struct Solver<'a, D: Dictionary + ?Sized> {
    config: SolverConfig,
    dictionary: &'a D,
}

/// Stack of the walk currently being explored
struct Walk {
    path: Vec<usize>,
    word: String,
    points: u32,
}

impl Walk {
    fn with_capacity(depth: usize) -> Self {
        Self {
            path: Vec::with_capacity(depth),
            word: String::with_capacity(depth),
            points: 0,
        }
    }

    fn push(&mut self, cell: usize, letter: Letter, points: u32) {
        self.path.push(cell);
        self.word.push(letter.as_lower());
        self.points += points;
    }

    fn pop(&mut self, points: u32) {
        self.path.pop();
        self.word.pop();
        self.points -= points;
    }

    fn to_match(&self) -> WordMatch {
        WordMatch {
            value: self.word.clone(),
            cell_indexes: self.path.clone(),
            points: self.points,
        }
    }
}

impl<'a, D: Dictionary + ?Sized> Solver<'a, D> {
    /// Create a new solver
    ///
    /// # Parameters
    /// - `config`: Grid shape, length bounds, point table
    /// - `dictionary`: Membership test for lowercase words
    pub const fn new(config: SolverConfig, dictionary: &'a D) -> Self {
        Self { config, dictionary }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find every dictionary word traceable on `grid`, best score first
    ///
    /// Starting cells are searched in index order and neighbors in the order given by
    /// [`GridShape::neighbors`]; that order breaks ties between equal scores.
    ///
    /// # Errors
    /// Returns `SolveError::ShapeMismatch` if the grid shape differs from the configured one.
    ///
    /// # Examples
    /// ```
    /// use word_grid_solver::core::Grid;
    /// use word_grid_solver::solver::{Solver, SolverConfig, WordList};
    ///
    /// let config = SolverConfig::default();
    /// let words = WordList::from_slice(&["crane"]);
    /// let grid = Grid::parse(config.shape(), "CRANE/...../...../...../.....").unwrap();
    ///
    /// let results = Solver::new(config, &words).solve(&grid).unwrap();
    /// assert_eq!(results.len(), 1);
    /// assert_eq!(results.best().unwrap().cell_indexes, vec![0, 1, 2, 3, 4]);
    /// ```
    pub fn solve(&self, grid: &Grid) -> Result<ResultSet, SolveError> {
        self.check_shape(grid)?;

        let mut matches = Vec::new();
        for start in 0..grid.shape().len() {
            let found = matches.len();
            self.search_from(grid, start, &mut matches);
            trace!("start cell {start}: {} matches", matches.len() - found);
        }

        Ok(self.rank(grid, matches))
    }

    /// Same result as [`Solver::solve`], with starting cells searched on the rayon pool
    ///
    /// # Errors
    /// Returns `SolveError::ShapeMismatch` if the grid shape differs from the configured one.
    pub fn solve_parallel(&self, grid: &Grid) -> Result<ResultSet, SolveError>
    where
        D: Sync,
    {
        self.check_shape(grid)?;

        let per_start: Vec<Vec<WordMatch>> = (0..grid.shape().len())
            .into_par_iter()
            .map(|start| {
                let mut found = Vec::new();
                self.search_from(grid, start, &mut found);
                trace!("start cell {start}: {} matches", found.len());
                found
            })
            .collect();

        Ok(self.rank(grid, per_start.into_iter().flatten().collect()))
    }

    fn check_shape(&self, grid: &Grid) -> Result<(), SolveError> {
        if grid.shape() == self.config.shape() {
            Ok(())
        } else {
            Err(SolveError::ShapeMismatch {
                expected: self.config.shape(),
                actual: grid.shape(),
            })
        }
    }

    fn rank(&self, grid: &Grid, matches: Vec<WordMatch>) -> ResultSet {
        debug!(
            "solved {} grid ({} letters), lengths {}..={}: {} matches",
            grid.shape(),
            grid.filled_count(),
            self.config.min_length(),
            self.config.max_length(),
            matches.len()
        );
        ResultSet::from_discovered(matches)
    }

    fn search_from(&self, grid: &Grid, start: usize, matches: &mut Vec<WordMatch>) {
        // A simple path never outgrows the grid
        let depth = self.config.max_length().min(grid.shape().len());
        let mut walk = Walk::with_capacity(depth);
        self.visit(grid, start, &mut walk, matches);
    }

    fn visit(&self, grid: &Grid, cell: usize, walk: &mut Walk, matches: &mut Vec<WordMatch>) {
        let open: Vec<usize> = grid
            .shape()
            .neighbors(cell)
            .into_iter()
            .filter(|n| !walk.path.contains(n))
            .collect();

        // Empty cells are walls
        let Some(letter) = grid.letter(cell) else {
            return;
        };
        if walk.word.len() >= self.config.max_length() {
            return;
        }
        if open.is_empty() && self.config.dead_ends() == DeadEndPolicy::Skip {
            return;
        }

        let points = self.config.letter_points().letter(letter);
        walk.push(cell, letter, points);

        if self.config.accepts_length(walk.word.len()) && self.dictionary.contains(&walk.word) {
            matches.push(walk.to_match());
        }

        for next in open {
            self.visit(grid, next, walk, matches);
        }

        walk.pop(points);
    }
}
