//! Mystic Battle engine
//!
//! A two-player game on a small square board. Players take turns placing one
//! of four elements (Fire, Water, Earth, Air) on an empty cell. The score of
//! the board is the sum of interactions between orthogonally adjacent
//! elements; the automated player maximizes it with a fixed-depth minimax.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation, elements and moves
//! - [`eval`]: Interaction table and adjacency scoring
//! - [`search`]: Fixed-depth minimax search
//! - [`engine`]: AI engine wrapping the search with configuration and timing
//! - [`game`]: Game session driving human and engine turns
//! - [`ui`]: egui front end
//! - [`cli`]: Command-line options and logging setup shared by the binaries
//!
//! # Quick Start
//!
//! ```
//! use mystic::{best_move, evaluate, new_board, Element};
//!
//! let mut board = new_board(3).unwrap();
//! assert!(board.place(0, 0, Element::Fire));
//! assert!(board.place(0, 1, Element::Water));
//! assert_eq!(evaluate(&board), -1);
//!
//! if let Some(mv) = best_move(&board, 2) {
//!     board.apply(mv);
//!     println!("AI plays {mv}");
//! }
//! println!("{}", board.render());
//! ```

pub mod board;
pub mod cli;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;
pub mod ui;


// Re-export commonly used types for convenience
pub use board::{Board, Element, Move, Pos, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use engine::{best_move, new_board, AIEngine, EngineConfig, MoveResult, DEFAULT_DEPTH};
pub use error::{Error, Result};
pub use eval::evaluate;
pub use game::{GameSession, TurnOutcome};
