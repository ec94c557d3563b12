//! Error types for the Mystic Battle engine
//!
//! Placement never fails with an error: `Board::place` reports an invalid move
//! through its boolean result. Errors only cover board construction and the
//! parsing of driver input.

use thiserror::Error;

/// Main error type for the engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid board size {size} (must be between 1 and {max})", max = crate::board::MAX_BOARD_SIZE)]
    InvalidBoardSize { size: usize },

    #[error("unknown element '{input}' (expected one of: Fire, Water, Earth, Air)")]
    UnknownElement { input: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
