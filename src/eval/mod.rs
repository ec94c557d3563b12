//! Evaluation module for Mystic Battle positions
//!
//! The score of a board is the sum of element interactions between
//! orthogonally adjacent cells. Each adjacency is read once, from the cell
//! on its left or above.

pub mod heuristic;
pub mod interactions;

pub use heuristic::{evaluate, placement_delta};
pub use interactions::{interaction, INTERACTIONS};
