//! Board representation for Mystic Battle

pub mod board;


use std::fmt;
use std::str::FromStr;

use crate::error::Error;

// Re-exports
pub use board::Board;

/// Board size used when the driver does not ask for another one (3x3)
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Largest accepted board side
pub const MAX_BOARD_SIZE: usize = 64;

/// Glyph rendered for an empty cell
pub const EMPTY_GLYPH: &str = "-";

/// Element tokens that can be placed on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
}

impl Element {
    /// Every element in declaration order.
    ///
    /// The search enumerates elements in this order, so it also decides
    /// which of several equally scored moves wins.
    pub const ALL: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Air];

    /// Display name
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Air => "Air",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Element::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownElement {
                input: trimmed.to_string(),
            })
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: idx / size,
            col: idx % size,
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// A placement: which element goes on which cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Pos,
    pub element: Element,
}

impl Move {
    #[inline]
    pub fn new(row: usize, col: usize, element: Element) -> Self {
        Self {
            pos: Pos::new(row, col),
            element,
        }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> usize {
        self.pos.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at ({}, {})", self.element, self.pos.row, self.pos.col)
    }
}
