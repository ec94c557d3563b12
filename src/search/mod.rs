//! Search module for the automated player
//!
//! Contains the fixed-depth minimax search and its move generator.

pub mod minimax;

pub use minimax::{generate_moves, SearchResult, Searcher};
