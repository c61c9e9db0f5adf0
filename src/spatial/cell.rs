//! Cell symbols and slot orientation

use crate::io::configuration::{BLOCKED, EMPTY};
use std::fmt;

/// Content of a single grid cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Never holds a letter and separates runs
    Blocked,
    /// Fillable but currently unresolved
    Empty,
    /// Holds a letter, either given or placed
    Letter(char),
}

impl Cell {
    /// Decode a grid text symbol; anything other than `.` or `?` is a letter
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            BLOCKED => Self::Blocked,
            EMPTY => Self::Empty,
            letter => Self::Letter(letter),
        }
    }

    /// Encode the cell back to its grid text symbol
    pub const fn symbol(self) -> char {
        match self {
            Self::Blocked => BLOCKED,
            Self::Empty => EMPTY,
            Self::Letter(letter) => letter,
        }
    }

    /// Test for a blocked cell
    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    /// Test for an unresolved cell
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Letter held by the cell, if any
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Letter(letter) => Some(letter),
            Self::Blocked | Self::Empty => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Orientation of a slot or placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Left to right along a row
    Across,
    /// Top to bottom along a column
    Down,
}

impl Direction {
    /// The crossing orientation
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Cell reached by moving `step` cells from an origin
    pub const fn offset(self, row: usize, col: usize, step: usize) -> (usize, usize) {
        match self {
            Self::Across => (row, col + step),
            Self::Down => (row + step, col),
        }
    }

    /// Map a (line, position) pair onto grid coordinates
    ///
    /// Lines are rows for `Across` and columns for `Down`.
    pub const fn locate(self, line: usize, position: usize) -> (usize, usize) {
        match self {
            Self::Across => (line, position),
            Self::Down => (position, line),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}
