//! Core domain types for letter grids
//!
//! This module contains the grid model, the adjacency relation and letter scoring.
//! All types here are pure, testable, and hold no search state.

mod grid;
mod letter;
mod scoring;
mod shape;

pub use grid::{Grid, GridError};
pub use letter::{Letter, LetterError};
pub use scoring::{LetterPoints, ScoreError};
pub use shape::{GridShape, ShapeError};
