//! Grid solving command
//!
//! Solves one grid, given as text or generated at random, and times the search.

use crate::core::{Grid, GridError, GridShape};
use crate::solver::{Dictionary, ResultSet, SolveError, Solver};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Result of solving a grid
pub struct SolveReport {
    pub grid: Grid,
    pub results: ResultSet,
    pub duration: Duration,
}

/// Parse a grid for the solver's configured shape
///
/// # Errors
///
/// Returns an error if the text holds the wrong number of cells or an invalid character.
pub fn parse_grid<D: Dictionary + ?Sized>(
    solver: &Solver<D>,
    text: &str,
) -> Result<Grid, GridError> {
    Grid::parse(solver.config().shape(), text)
}

/// Build a random grid, reproducible when `seed` is given
#[must_use]
pub fn random_grid(shape: GridShape, seed: Option<u64>) -> Grid {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    Grid::random(shape, &mut rng)
}

/// Solve a grid, optionally spreading the starting cells over the thread pool
///
/// # Errors
///
/// Returns an error if the grid shape does not match the solver configuration.
pub fn solve_grid<D: Dictionary + Sync + ?Sized>(
    solver: &Solver<D>,
    grid: Grid,
    parallel: bool,
) -> Result<SolveReport, SolveError> {
    let start = Instant::now();
    let results = if parallel {
        solver.solve_parallel(&grid)?
    } else {
        solver.solve(&grid)?
    };

    Ok(SolveReport {
        grid,
        results,
        duration: start.elapsed(),
    })
}
