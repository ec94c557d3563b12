//! Game session: one human (or any external driver) against the engine
//!
//! The session owns the board. A turn is the human placement followed by
//! the engine's reply; the game ends when every cell is filled. Drivers only
//! see the board through shared references, so committed placements can never
//! be removed from outside.

use tracing::{debug, info};

use crate::board::{Board, Element, Move};
use crate::engine::{AIEngine, EngineConfig, MoveResult};
use crate::error::Result;
use crate::eval::evaluate;

/// What happened when the driver submitted a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Coordinates out of range or cell occupied; nothing changed
    Rejected,
    /// The human move was applied and the engine replied (or skipped)
    Played {
        human: Move,
        /// None when the human filled the last cell
        ai: Option<Move>,
        /// Board score after both moves
        score: i32,
        game_over: bool,
    },
}

/// A running game
pub struct GameSession {
    board: Board,
    engine: AIEngine,
    last_human: Option<Move>,
    last_ai: Option<Move>,
    last_ai_result: Option<MoveResult>,
}

impl GameSession {
    /// Start a game on an empty `size` x `size` board.
    pub fn new(size: usize, config: EngineConfig) -> Result<Self> {
        let board = Board::new(size)?;
        info!(size, depth = config.depth, threads = config.threads, "new game");
        Ok(Self {
            board,
            engine: AIEngine::with_config(config),
            last_human: None,
            last_ai: None,
            last_ai_result: None,
        })
    }

    /// Start over on an empty board of the same size
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.size()).unwrap_or_default();
        self.last_human = None;
        self.last_ai = None;
        self.last_ai_result = None;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn score(&self) -> i32 {
        evaluate(&self.board)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.board.is_full()
    }

    pub fn last_human_move(&self) -> Option<Move> {
        self.last_human
    }

    pub fn last_ai_move(&self) -> Option<Move> {
        self.last_ai
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    pub fn engine_config(&self) -> EngineConfig {
        self.engine.config()
    }

    /// Apply the human's placement. Returns false when it is invalid.
    pub fn play_human(&mut self, mv: Move) -> bool {
        if !self.board.apply(mv) {
            debug!(?mv, "rejected human move");
            return false;
        }
        self.last_human = Some(mv);
        debug!(?mv, score = self.score(), "human move");
        true
    }

    /// Let the engine choose and play its move on this thread.
    pub fn play_ai(&mut self) -> Option<Move> {
        let result = self.engine.get_move_with_stats(&self.board);
        self.apply_ai_result(result)
    }

    /// Apply a search result computed elsewhere (e.g. on a worker thread).
    ///
    /// A result whose move no longer fits the board is dropped.
    pub fn apply_ai_result(&mut self, result: MoveResult) -> Option<Move> {
        let mv = result.best_move.filter(|&mv| self.board.apply(mv));
        if mv.is_none() {
            debug!("engine skipped its turn");
        }
        self.last_ai = mv;
        self.last_ai_result = Some(result);
        mv
    }

    /// Full turn: the human move, then the engine's reply.
    pub fn take_turn(&mut self, row: usize, col: usize, element: Element) -> TurnOutcome {
        let human = Move::new(row, col, element);
        if !self.play_human(human) {
            return TurnOutcome::Rejected;
        }

        let ai = self.play_ai();
        let score = self.score();
        let game_over = self.is_over();
        if game_over {
            info!(score, "game over");
        }

        TurnOutcome::Played {
            human,
            ai,
            score,
            game_over,
        }
    }
}

impl Default for GameSession {
    /// 3x3 board, depth-2 engine
    fn default() -> Self {
        Self {
            board: Board::default(),
            engine: AIEngine::default(),
            last_human: None,
            last_ai: None,
            last_ai_result: None,
        }
    }
}
