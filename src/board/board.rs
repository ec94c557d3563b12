//! Square board of optional elements

use std::fmt;

use super::{Element, Move, Pos, DEFAULT_BOARD_SIZE, EMPTY_GLYPH, MAX_BOARD_SIZE};
use crate::error::{Error, Result};

/// Game board: an N x N grid where each cell is empty or holds an element.
///
/// The size is fixed at construction. A committed placement is never cleared
/// from outside the crate; the search engine is the only caller of
/// [`Board::clear`] and always restores the cell it probed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Option<Element>>,
}

impl Board {
    /// Create an empty board of `size` x `size` cells.
    ///
    /// Sizes outside `1..=MAX_BOARD_SIZE` are rejected.
    pub fn new(size: usize) -> Result<Self> {
        if !(1..=MAX_BOARD_SIZE).contains(&size) {
            return Err(Error::InvalidBoardSize { size });
        }
        Ok(Self::empty(size))
    }

    /// Empty board of an already validated size
    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check that a coordinate pair lies inside the board
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get the element at position (None when empty or out of range)
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Element> {
        if self.in_bounds(pos.row, pos.col) {
            self.cells[pos.to_index(self.size)]
        } else {
            None
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        self.in_bounds(pos.row, pos.col) && self.cells[pos.to_index(self.size)].is_none()
    }

    /// Place an element.
    ///
    /// Returns `false` and leaves the board untouched when the coordinates are
    /// out of range or the cell is occupied. Callers are expected to ask for
    /// another move in that case.
    pub fn place(&mut self, row: usize, col: usize, element: Element) -> bool {
        let pos = Pos::new(row, col);
        if !self.is_empty_at(pos) {
            return false;
        }
        self.cells[pos.to_index(self.size)] = Some(element);
        true
    }

    /// Place the element of a move at its position (see [`Board::place`])
    #[inline]
    pub fn apply(&mut self, mv: Move) -> bool {
        self.place(mv.pos.row, mv.pos.col, mv.element)
    }

    /// Empty a cell. Only the search's undo step may call this.
    #[inline]
    pub(crate) fn clear(&mut self, pos: Pos) {
        debug_assert!(self.in_bounds(pos.row, pos.col));
        self.cells[pos.to_index(self.size)] = None;
    }

    /// Number of occupied cells
    #[inline]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True when every cell holds an element
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate over empty positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(idx, _)| Pos::from_index(idx, size))
    }

    /// Iterate over occupied cells in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Element)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.map(|e| (Pos::from_index(idx, size), e)))
    }

    /// Text form of the board: rows separated by newlines, cells by spaces,
    /// empty cells shown as `-`.
    pub fn render(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or(EMPTY_GLYPH, Element::name))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
