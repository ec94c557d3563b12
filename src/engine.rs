//! Main AI engine wrapping the minimax searcher
//!
//! This module provides the engine the drivers talk to. It holds the search
//! configuration, times each search and reports the chosen move together
//! with its statistics.
//!
//! # Example
//!
//! ```
//! use mystic::{AIEngine, Board, Element};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::default();
//! board.place(0, 0, Element::Fire);
//!
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {}", result.score);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Move};
use crate::error::Result;
use crate::search::{SearchResult, Searcher};

/// Search depth used by the automated player: its own move plus one reply.
pub const DEFAULT_DEPTH: i32 = 2;

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched ahead (negative values act as 0)
    pub depth: i32,
    /// Threads used to split the root moves (1 = sequential)
    pub threads: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            threads: 1,
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, None when the board is full
    pub best_move: Option<Move>,
    /// Minimax value of the position
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// AI engine for the automated player.
///
/// # Example
///
/// ```
/// use mystic::{AIEngine, Board, EngineConfig};
///
/// let mut engine = AIEngine::with_config(EngineConfig { depth: 1, threads: 2 });
/// let board = Board::default();
/// if let Some(mv) = engine.get_move(&board) {
///     println!("Play {mv}");
/// }
/// ```
pub struct AIEngine {
    searcher: Searcher,
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine with the default configuration (depth 2, one thread).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::with_threads(config.threads),
            config,
        }
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` only when the board has no empty cell; the caller
    /// should skip the automated turn in that case.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Move> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with detailed search statistics.
    ///
    /// The board is left exactly as it was passed in.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        if board.is_full() {
            debug!("board is full, no move to search");
        }

        let result = self.searcher.search(board, self.config.depth);
        let move_result = MoveResult::from_search(result, start.elapsed().as_millis() as u64);

        info!(
            best_move = ?move_result.best_move,
            score = move_result.score,
            nodes = move_result.nodes,
            time_ms = move_result.time_ms,
            "engine move chosen"
        );
        move_result
    }

    /// Set the search depth.
    pub fn set_depth(&mut self, depth: i32) {
        self.config.depth = depth;
    }

    /// Get the current search depth.
    #[must_use]
    pub fn depth(&self) -> i32 {
        self.config.depth
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Construct an empty `size` x `size` board.
pub fn new_board(size: usize) -> Result<Board> {
    Board::new(size)
}

/// Best move for the maximizing side, searching `depth` plies.
///
/// Returns `None` when the board is full.
#[must_use]
pub fn best_move(board: &Board, depth: i32) -> Option<Move> {
    Searcher::new().search(board, depth).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Element;
    use crate::error::Error;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.depth(), 2);
        assert_eq!(engine.config().threads, 1);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(EngineConfig { depth: 3, threads: 4 });
        assert_eq!(engine.depth(), 3);
        assert_eq!(engine.config().threads, 4);
    }

    #[test]
    fn test_engine_set_depth() {
        let mut engine = AIEngine::default();
        engine.set_depth(1);
        assert_eq!(engine.depth(), 1);
    }

    #[test]
    fn test_engine_full_board() {
        let mut board = Board::new(1).unwrap();
        board.place(0, 0, Element::Earth);

        let mut engine = AIEngine::new();
        let result = engine.get_move_with_stats(&board);
        assert!(result.best_move.is_none());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_engine_move_is_legal() {
        let mut board = Board::default();
        board.place(1, 1, Element::Fire);

        let mut engine = AIEngine::new();
        let mv = engine.get_move(&board).expect("board has empty cells");
        assert!(board.is_empty_at(mv.pos));
        assert!(board.apply(mv));
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut engine = AIEngine::new();
        let mut board = Board::default();
        board.place(0, 0, Element::Water);

        let result1 = engine.get_move(&board);
        let result2 = engine.get_move(&board);
        assert_eq!(result1, result2);
    }

    #[test]
    fn test_engine_matches_free_function() {
        let mut board = Board::default();
        board.place(2, 2, Element::Air);

        let mut engine = AIEngine::new();
        assert_eq!(engine.get_move(&board), best_move(&board, DEFAULT_DEPTH));
    }

    #[test]
    fn test_new_board() {
        let board = new_board(4).unwrap();
        assert_eq!(board.size(), 4);
        assert!(matches!(new_board(0), Err(Error::InvalidBoardSize { size: 0 })));
    }

    #[test]
    fn test_engine_alternating_turns() {
        let mut engine = AIEngine::new();
        let mut board = Board::new(2).unwrap();

        while let Some(mv) = engine.get_move(&board) {
            assert!(board.apply(mv));
        }
        assert!(board.is_full());
    }
}
