//! Word discovery
//!
//! This module contains the path search engine and the types around it.

pub mod config;
pub mod dictionary;
mod engine;
mod word_match;

pub use config::{ConfigError, DeadEndPolicy, SolverConfig};
pub use dictionary::{Dictionary, WordList};
pub use engine::{SolveError, Solver};
pub use word_match::{ResultSet, WordMatch};
