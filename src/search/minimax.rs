//! Fixed-depth minimax search
//!
//! This module implements the search used by the automated player. It is a
//! plain exhaustive minimax: no pruning, no transposition table, no move
//! ordering beyond the natural enumeration order.
//!
//! # Features
//!
//! - Branches over every empty cell and every element (either side may place
//!   any element anywhere)
//! - In-place make/unmake on a private copy of the board, with the unmake
//!   tied to a scope guard so it runs on every return path
//! - Deterministic tie-break: strict improvement only, first move in
//!   row-major / element order wins
//! - Optional root split across threads that returns the same move as the
//!   sequential search
//!
//! # Example
//!
//! ```
//! use mystic::board::{Board, Element};
//! use mystic::search::Searcher;
//!
//! let mut board = Board::default();
//! board.place(0, 0, Element::Fire);
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, 2);
//! if let Some(mv) = result.best_move {
//!     println!("Best move: {mv} (score {})", result.score);
//! }
//! ```

use std::ops::{Deref, DerefMut};

use tracing::{debug, trace, warn};

use crate::board::{Board, Element, Move, Pos};
use crate::eval::evaluate;

/// Infinity score for the running best value
const INF: i32 = i32::MAX;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, None when the board had no empty cell or depth was 0
    pub best_move: Option<Move>,
    /// Minimax value of the root position
    pub score: i32,
    /// Depth actually searched (negative requests are clamped to 0)
    pub depth: i32,
    /// Total nodes visited
    pub nodes: u64,
}

/// Enumerate every legal placement: empty cells in row-major order, and for
/// each cell every element in declaration order.
#[must_use]
pub fn generate_moves(board: &Board) -> Vec<Move> {
    board
        .empty_cells()
        .flat_map(|pos| Element::ALL.into_iter().map(move |element| Move { pos, element }))
        .collect()
}

// =============================================================================
// Probe: a placement that is undone when it goes out of scope
// =============================================================================

/// Exclusive borrow of the work board with one probed placement on it.
///
/// Dropping the probe clears the cell again, which restores the board to its
/// state before the probe.
struct Probe<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> Probe<'a> {
    fn place(board: &'a mut Board, mv: Move) -> Self {
        let placed = board.apply(mv);
        debug_assert!(placed, "search probed an occupied cell: {mv:?}");
        Self { board, pos: mv.pos }
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.clear(self.pos);
    }
}

// =============================================================================
// Worker: per-thread search state
// =============================================================================

/// Per-thread search worker. Only counts nodes; the board it searches is
/// passed in and always handed back unchanged.
#[derive(Debug, Default)]
struct Worker {
    nodes: u64,
}

impl Worker {
    /// Recursive minimax. Returns the value of `board` and the move reaching it.
    fn minimax(&mut self, board: &mut Board, depth: i32, maximizing: bool) -> (i32, Option<Move>) {
        self.nodes += 1;

        if depth <= 0 {
            return (evaluate(board), None);
        }

        let moves = generate_moves(board);
        if moves.is_empty() {
            return (evaluate(board), None);
        }

        self.best_of(board, &moves, depth, maximizing)
    }

    /// Evaluate `moves` one by one and keep the best, first seen on ties.
    fn best_of(
        &mut self,
        board: &mut Board,
        moves: &[Move],
        depth: i32,
        maximizing: bool,
    ) -> (i32, Option<Move>) {
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for &mv in moves {
            let score = {
                let mut probe = Probe::place(board, mv);
                self.minimax(&mut probe, depth - 1, !maximizing).0
            };

            if is_improvement(score, best_score, maximizing) {
                best_score = score;
                best_move = Some(mv);
            }
        }

        (best_score, best_move)
    }
}

/// Strict improvement test shared by the sequential and parallel paths
#[inline]
fn is_improvement(score: i32, best: i32, maximizing: bool) -> bool {
    if maximizing {
        score > best
    } else {
        score < best
    }
}

// =============================================================================
// Searcher: public API
// =============================================================================

/// Minimax searcher for the automated player.
///
/// The caller's board is never touched: the searcher works on its own copy,
/// so a board compares equal before and after [`Searcher::search`].
#[derive(Debug, Clone)]
pub struct Searcher {
    num_threads: usize,
}

impl Searcher {
    /// Create a single-threaded searcher.
    #[must_use]
    pub fn new() -> Self {
        Self::with_threads(1)
    }

    /// Create a searcher that splits the root moves across `num_threads`.
    #[must_use]
    pub fn with_threads(num_threads: usize) -> Self {
        Self {
            num_threads: num_threads.max(1),
        }
    }

    #[must_use]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Search `depth` plies ahead, starting with the maximizing side.
    ///
    /// Negative depths are treated as 0 and return the static evaluation.
    #[must_use]
    pub fn search(&mut self, board: &Board, depth: i32) -> SearchResult {
        let depth = depth.max(0);
        let root_moves = if depth > 0 { generate_moves(board) } else { Vec::new() };

        let (score, best_move, nodes) = if self.num_threads > 1 && root_moves.len() > 1 {
            self.search_parallel(board, &root_moves, depth)
        } else {
            let mut work_board = board.clone();
            let mut worker = Worker::default();
            let (score, best_move) = worker.minimax(&mut work_board, depth, true);
            debug_assert_eq!(&work_board, board, "search leaked a probe");
            (score, best_move, worker.nodes)
        };

        debug!(
            depth,
            nodes,
            score,
            best_move = ?best_move,
            "minimax search complete"
        );

        SearchResult {
            best_move,
            score,
            depth,
            nodes,
        }
    }

    /// Root split: each thread takes a contiguous run of root moves on its own
    /// board copy, then the chunk winners are merged in enumeration order.
    fn search_parallel(
        &self,
        board: &Board,
        root_moves: &[Move],
        depth: i32,
    ) -> (i32, Option<Move>, u64) {
        let chunk_size = root_moves.len().div_ceil(self.num_threads);
        trace!(chunk_size, threads = self.num_threads, "splitting root moves");

        let handles: Vec<_> = root_moves
            .chunks(chunk_size)
            .map(<[Move]>::to_vec)
            .map(|chunk| {
                let mut board_clone = board.clone();
                std::thread::spawn(move || {
                    let mut worker = Worker::default();
                    // The root itself is counted once by the caller
                    let (score, best) = worker.best_of(&mut board_clone, &chunk, depth, true);
                    (score, best, worker.nodes)
                })
            })
            .collect();

        let mut best_score = -INF;
        let mut best_move = None;
        let mut total_nodes = 1;

        for handle in handles {
            let (score, mv, nodes) = match handle.join() {
                Ok(result) => result,
                Err(payload) => {
                    warn!("search worker panicked");
                    std::panic::resume_unwind(payload);
                }
            };
            total_nodes += nodes;
            if is_improvement(score, best_score, true) {
                best_score = score;
                best_move = mv;
            }
        }

        (best_score, best_move, total_nodes)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(layout: &[&[Option<Element>]]) -> Board {
        let mut board = Board::new(layout.len()).unwrap();
        for (r, row) in layout.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(e) = cell {
                    assert!(board.place(r, c, *e));
                }
            }
        }
        board
    }

    #[test]
    fn test_generate_moves_order() {
        let mut board = Board::new(2).unwrap();
        board.place(0, 0, Element::Fire);

        let moves = generate_moves(&board);
        assert_eq!(moves.len(), 3 * 4);
        assert_eq!(moves[0], Move::new(0, 1, Element::Fire));
        assert_eq!(moves[1], Move::new(0, 1, Element::Water));
        assert_eq!(moves[3], Move::new(0, 1, Element::Air));
        assert_eq!(moves[4], Move::new(1, 0, Element::Fire));
        assert_eq!(moves[11], Move::new(1, 1, Element::Air));
    }

    #[test]
    fn test_search_full_board_has_no_move() {
        use Element::*;
        let board = board_from(&[
            &[Some(Fire), Some(Water)],
            &[Some(Earth), Some(Air)],
        ]);

        let result = Searcher::new().search(&board, 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board));
    }

    #[test]
    fn test_search_depth_zero_is_static() {
        let mut board = Board::default();
        board.place(0, 0, Element::Fire);
        board.place(0, 1, Element::Water);

        let result = Searcher::new().search(&board, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -1);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_negative_depth_treated_as_zero() {
        let board = Board::default();
        let result = Searcher::new().search(&board, -3);
        assert_eq!(result.depth, 0);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_search_last_empty_cell() {
        use Element::*;
        // Fire  Water Earth
        // Air   Fire  Water
        // Earth Air   -
        let board = board_from(&[
            &[Some(Fire), Some(Water), Some(Earth)],
            &[Some(Air), Some(Fire), Some(Water)],
            &[Some(Earth), Some(Air), None],
        ]);

        // Up neighbor is Water, left neighbor is Air:
        // Fire:  (Water,Fire)=+1 (Air,Fire)=-1 -> 0
        // Water: 0 + 0                         -> 0
        // Earth: (Water,Earth)=-1 (Air,Earth)=+1 -> 0
        // Air:   0 + 0                         -> 0
        // All tie, so Fire wins by declaration order.
        let result = Searcher::new().search(&board, 2);
        assert_eq!(result.best_move, Some(Move::new(2, 2, Fire)));
        assert_eq!(result.score, evaluate(&board));
    }

    #[test]
    fn test_search_last_cell_prefers_best_element() {
        use Element::*;
        // Earth -
        // Earth Fire
        // Placing at (0,1): left Earth attacks it, it attacks Fire below.
        let board = board_from(&[&[Some(Earth), None], &[Some(Earth), Some(Fire)]]);

        // Fire:  (Earth,Fire)=0 + (Fire,Fire)=0   -> 0
        // Water: (Earth,Water)=+1 + (Water,Fire)=+1 -> 2
        // Earth: 0 + (Earth,Fire)=0               -> 0
        // Air:   (Earth,Air)=-1 + (Air,Fire)=-1   -> -2
        let result = Searcher::new().search(&board, 1);
        assert_eq!(result.best_move, Some(Move::new(0, 1, Water)));
        assert_eq!(result.score, evaluate(&board) + 2);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let mut board = Board::default();
        board.place(1, 1, Element::Air);
        board.place(0, 2, Element::Water);
        let before = board.clone();

        let _ = Searcher::new().search(&board, 2);
        assert_eq!(board, before);
    }

    #[test]
    fn test_probe_restores_on_drop() {
        let mut board = Board::default();
        let before = board.clone();
        {
            let probe = Probe::place(&mut board, Move::new(1, 2, Element::Earth));
            assert_eq!(probe.get(Pos::new(1, 2)), Some(Element::Earth));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_deterministic() {
        let mut board = Board::default();
        board.place(0, 0, Element::Fire);

        let mut searcher = Searcher::new();
        let first = searcher.search(&board, 2);
        let second = searcher.search(&board, 2);
        assert_eq!(first, second);
        assert!(first.best_move.is_some());
    }

    #[test]
    fn test_search_node_count() {
        // 2x2 empty board at depth 1: root + 4 cells * 4 elements
        let board = Board::new(2).unwrap();
        let result = Searcher::new().search(&board, 1);
        assert_eq!(result.nodes, 1 + 16);
    }

    #[test]
    fn test_minimizing_tie_keeps_first_reply() {
        use Element::*;
        // Fire  -
        // -     -
        // Water at (0,1) or at (1,0) both score -1; (0,1) comes first.
        let mut board = board_from(&[&[Some(Fire), None], &[None, None]]);

        let mut worker = Worker::default();
        let (score, reply) = worker.minimax(&mut board, 1, false);
        assert_eq!(score, -1);
        assert_eq!(reply, Some(Move::new(0, 1, Water)));
        assert_eq!(worker.nodes, 1 + 3 * 4);
    }

    #[test]
    fn test_minimizing_reply_is_considered() {
        use Element::*;
        // Two empty cells; depth 2 means the opponent answers.
        // Fire  -
        // -     Water
        let board = board_from(&[&[Some(Fire), None], &[None, Some(Water)]]);

        let result = Searcher::new().search(&board, 2);
        let best = result.best_move.expect("board has empty cells");

        // Recompute the max-min value of the chosen move by hand
        let mut after = board.clone();
        assert!(after.apply(best));
        let reply_min = generate_moves(&after)
            .into_iter()
            .map(|reply| {
                let mut b = after.clone();
                b.apply(reply);
                evaluate(&b)
            })
            .min()
            .unwrap();
        assert_eq!(result.score, reply_min);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut board = Board::default();
        board.place(0, 0, Element::Fire);
        board.place(1, 1, Element::Water);
        board.place(2, 0, Element::Air);

        let sequential = Searcher::new().search(&board, 2);
        for threads in [2, 3, 4, 8, 64] {
            let parallel = Searcher::with_threads(threads).search(&board, 2);
            assert_eq!(parallel.best_move, sequential.best_move, "threads={threads}");
            assert_eq!(parallel.score, sequential.score, "threads={threads}");
            assert_eq!(parallel.nodes, sequential.nodes, "threads={threads}");
        }
    }

    #[test]
    fn test_parallel_search_leaves_board_untouched() {
        let mut board = Board::default();
        board.place(0, 1, Element::Earth);
        let before = board.clone();

        let result = Searcher::with_threads(4).search(&board, 2);
        assert!(result.best_move.is_some());
        assert_eq!(board, before);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "search probed an occupied cell")]
    fn test_worker_panic_reaches_caller() {
        let mut board = Board::new(2).unwrap();
        board.place(0, 0, Element::Fire);

        let moves = [Move::new(0, 0, Element::Water), Move::new(1, 1, Element::Water)];
        let _ = Searcher::with_threads(2).search_parallel(&board, &moves, 1);
    }

    #[test]
    fn test_with_threads_clamps_to_one() {
        assert_eq!(Searcher::with_threads(0).num_threads(), 1);
        assert_eq!(Searcher::default().num_threads(), 1);
    }
}
