//! Game state management for the Mystic Battle GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::{AIEngine, Element, GameSession, Move, MoveResult, Pos};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// GUI-side game state: the session plus what the window needs around it
pub struct GameState {
    pub session: GameSession,
    pub selected: Element,
    pub ai_state: AiState,
    pub ai_thinking_time: Option<Duration>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            selected: Element::Fire,
            ai_state: AiState::Idle,
            ai_thinking_time: None,
            message: None,
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.ai_state = AiState::Idle;
        self.ai_thinking_time = None;
        self.message = None;
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_over()
    }

    /// Cells to mark as "just played"
    pub fn last_moves(&self) -> Vec<Pos> {
        [self.session.last_human_move(), self.session.last_ai_move()]
            .into_iter()
            .flatten()
            .map(|mv| mv.pos)
            .collect()
    }

    /// Attempt to place the selected element at the given position.
    /// Starts the engine's reply on success.
    pub fn try_place(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.session.play_human(Move { pos, element: self.selected }) {
            return Err("Invalid move! Try again.".to_string());
        }

        self.message = None;
        self.start_ai_thinking();
        Ok(())
    }

    /// Run the engine on a worker thread
    fn start_ai_thinking(&mut self) {
        if self.is_ai_thinking() {
            return;
        }

        let board = self.session.board().clone();
        let config = self.session.engine_config();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("engine thread ended without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.ai_thinking_time = Some(elapsed);
            self.session.apply_ai_result(move_result);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameSession::default())
    }
}
