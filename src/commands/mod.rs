//! Command implementations

pub mod benchmark;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{SolveReport, parse_grid, random_grid, solve_grid};
