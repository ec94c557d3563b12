//! Adjacency scoring for Mystic Battle boards
//!
//! This module provides the evaluation function used both for the live score
//! shown to players and as the leaf evaluation of the minimax search.
//! Positive scores favour the maximizing side.

use crate::board::{Board, Element, Pos};

use super::interactions::interaction;

/// Forward directions (right, down).
/// Scanning only these counts every adjacency exactly once.
const FORWARD: [(usize, usize); 2] = [
    (0, 1), // Right
    (1, 0), // Down
];

/// Evaluate the board.
///
/// Sums, over every occupied cell, the interaction with its right and lower
/// neighbors when those are occupied. Works on any board, full or not.
///
/// # Arguments
/// * `board` - The board to score
///
/// # Returns
/// The total adjacency score
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    for (pos, element) in board.occupied() {
        for &(dr, dc) in &FORWARD {
            let neighbor = Pos::new(pos.row + dr, pos.col + dc);
            if let Some(other) = board.get(neighbor) {
                score += interaction(element, other);
            }
        }
    }

    score
}

/// Score change caused by placing `element` on the empty cell `pos`.
///
/// The new cell attacks its right and lower neighbors and is attacked by its
/// left and upper neighbors. Returns 0 when the cell is occupied or off the
/// board, since such a placement would be rejected.
#[must_use]
pub fn placement_delta(board: &Board, pos: Pos, element: Element) -> i32 {
    if !board.is_empty_at(pos) {
        return 0;
    }

    let mut delta = 0;

    // Forward: the new element is the attacker
    for &(dr, dc) in &FORWARD {
        if let Some(other) = board.get(Pos::new(pos.row + dr, pos.col + dc)) {
            delta += interaction(element, other);
        }
    }

    // Backward: the neighbor above / to the left is the attacker
    if pos.row > 0 {
        if let Some(up) = board.get(Pos::new(pos.row - 1, pos.col)) {
            delta += interaction(up, element);
        }
    }
    if pos.col > 0 {
        if let Some(left) = board.get(Pos::new(pos.row, pos.col - 1)) {
            delta += interaction(left, element);
        }
    }

    delta
}
