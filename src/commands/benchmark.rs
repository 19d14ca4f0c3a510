//! Benchmark command
//!
//! Tests solver performance across many random grids.

use crate::core::Grid;
use crate::solver::{Dictionary, SolveError, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_grids: usize,
    pub total_matches: usize,
    pub average_matches: f64,
    pub min_matches: usize,
    pub max_matches: usize,
    pub empty_grids: usize,
    /// Highest scoring word over all grids, with its points
    pub best_word: Option<(String, u32)>,
    pub duration: Duration,
    pub grids_per_second: f64,
}

/// Solve `count` random grids and collect statistics
///
/// Grids come from a generator seeded with `seed` when given, so runs can be repeated.
///
/// # Errors
///
/// Returns an error if a grid does not match the solver configuration.
pub fn run_benchmark<D: Dictionary + Sync + ?Sized>(
    solver: &Solver<D>,
    count: usize,
    seed: Option<u64>,
    parallel: bool,
) -> Result<BenchmarkResult, SolveError> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let shape = solver.config().shape();

    let pb = ProgressBar::new(count as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut total_matches = 0;
    let mut min_matches = usize::MAX;
    let mut max_matches = 0;
    let mut empty_grids = 0;
    let mut best_word: Option<(String, u32)> = None;

    for _ in 0..count {
        let grid = Grid::random(shape, &mut rng);
        let results = if parallel {
            solver.solve_parallel(&grid)?
        } else {
            solver.solve(&grid)?
        };

        let found = results.len();
        total_matches += found;
        min_matches = min_matches.min(found);
        max_matches = max_matches.max(found);
        if found == 0 {
            empty_grids += 1;
        }
        if let Some(top) = results.best() {
            if best_word.as_ref().is_none_or(|(_, points)| top.points > *points) {
                best_word = Some((top.value.clone(), top.points));
            }
        }

        pb.set_message(format!("{found} words"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    if count == 0 {
        min_matches = 0;
    }
    info!("benchmarked {count} grids in {:.2}s", duration.as_secs_f64());

    Ok(BenchmarkResult {
        total_grids: count,
        total_matches,
        average_matches: if count == 0 {
            0.0
        } else {
            total_matches as f64 / count as f64
        },
        min_matches,
        max_matches,
        empty_grids,
        best_word,
        duration,
        grids_per_second: count as f64 / duration.as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{SolverConfig, WordList};

    fn default_words() -> WordList {
        WordList::from_slice(crate::wordlists::DICTIONARY)
    }

    #[test]
    fn benchmark_runs() {
        let words = default_words();
        let solver = Solver::new(SolverConfig::default(), &words);
        let result = run_benchmark(&solver, 5, Some(1), false).unwrap();

        assert_eq!(result.total_grids, 5);
        assert!(result.min_matches <= result.max_matches);
        assert!(result.empty_grids <= 5);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let words = default_words();
        let solver = Solver::new(SolverConfig::default(), &words);
        let result = run_benchmark(&solver, 8, Some(9), false).unwrap();

        // Average should be between min and max
        assert!(result.average_matches >= result.min_matches as f64);
        assert!(result.average_matches <= result.max_matches as f64);
        assert_eq!(result.best_word.is_some(), result.total_matches > 0);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let words = default_words();
        let solver = Solver::new(SolverConfig::default(), &words);
        let first = run_benchmark(&solver, 4, Some(21), false).unwrap();
        let second = run_benchmark(&solver, 4, Some(21), true).unwrap();

        assert_eq!(first.total_matches, second.total_matches);
        assert_eq!(first.best_word, second.best_word);
    }

    #[test]
    fn benchmark_zero_grids() {
        let words = default_words();
        let solver = Solver::new(SolverConfig::default(), &words);
        let result = run_benchmark(&solver, 0, None, false).unwrap();

        assert_eq!(result.total_grids, 0);
        assert_eq!(result.total_matches, 0);
        assert_eq!(result.min_matches, 0);
        assert!(result.best_word.is_none());
    }
}
