//! Word Grid Solver
//!
//! Finds every dictionary word that can be traced through adjacent cells of a letter grid
//! and ranks the words by letter points.
//!
//! # Quick Start
//!
//! ```rust
//! use word_grid_solver::core::Grid;
//! use word_grid_solver::solver::{Solver, SolverConfig};
//! use word_grid_solver::wordlists::loader::default_word_list;
//!
//! let config = SolverConfig::default();
//! let words = default_word_list();
//! let grid = Grid::parse(config.shape(), "CRANE/SLATE/TRAIN/BRAIN/GRAPE").unwrap();
//!
//! let results = Solver::new(config, &words).solve(&grid).unwrap();
//! for word in results.iter().take(5) {
//!     println!("{} ({} points)", word.value, word.points);
//! }
//! ```

// Core domain types
pub mod core;

// Word discovery engine
pub mod solver;

// Word lists
pub mod wordlists;

// Configuration file
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
