//! Slots derived from the grid and the placements written into them

use crate::spatial::cell::Direction;
use std::cmp::Reverse;
use std::fmt;

/// Origin and orientation identifying a slot across grid mutations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Anchor {
    /// Origin row
    pub row: usize,
    /// Origin column
    pub col: usize,
    /// Orientation
    pub direction: Direction,
}

/// Maximal run of non-blocked cells, longer than one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Origin row
    pub row: usize,
    /// Origin column
    pub col: usize,
    /// Number of cells in the run
    pub length: usize,
    /// Orientation
    pub direction: Direction,
    /// Cells currently holding a letter
    pub fixed_count: usize,
    /// Cells with a filled perpendicular neighbour outside the run
    pub cross_count: usize,
}

impl Slot {
    /// Create a slot with no heuristic annotations
    pub const fn new(row: usize, col: usize, length: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            length,
            direction,
            fixed_count: 0,
            cross_count: 0,
        }
    }

    /// Slot spanning the cells of an existing placement
    pub fn spanning(placement: &Placement) -> Self {
        Self::new(
            placement.row,
            placement.col,
            placement.length(),
            placement.direction,
        )
    }

    /// Identity of the slot
    pub const fn anchor(&self) -> Anchor {
        Anchor {
            row: self.row,
            col: self.col,
            direction: self.direction,
        }
    }

    /// Grid coordinates of every cell, origin first
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |step| self.direction.offset(self.row, self.col, step))
    }

    /// Test if the slot occupies a cell
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        covers(self.row, self.col, self.length, self.direction, row, col)
    }
}

/// Sort slots so the most constrained come first
///
/// Order is `cross_count` descending, then length descending, then
/// `fixed_count` descending. The sort is stable, so scan order breaks ties.
pub fn order_slots(slots: &mut [Slot]) {
    slots.sort_by_key(|slot| {
        (
            Reverse(slot.cross_count),
            Reverse(slot.length),
            Reverse(slot.fixed_count),
        )
    });
}

/// Word bound to a slot position
///
/// Also used for the words a grid currently spells, which share the same
/// (word, row, col, direction) shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Word text
    pub word: String,
    /// Origin row
    pub row: usize,
    /// Origin column
    pub col: usize,
    /// Orientation
    pub direction: Direction,
}

impl Placement {
    /// Create a placement
    pub fn new(word: impl Into<String>, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            word: word.into(),
            row,
            col,
            direction,
        }
    }

    /// Number of cells the word occupies
    pub fn length(&self) -> usize {
        self.word.chars().count()
    }

    /// Identity of the slot the word occupies
    pub const fn anchor(&self) -> Anchor {
        Anchor {
            row: self.row,
            col: self.col,
            direction: self.direction,
        }
    }

    /// Each occupied cell with the letter written there
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), char)> + '_ {
        self.word
            .chars()
            .enumerate()
            .map(move |(step, letter)| (self.direction.offset(self.row, self.col, step), letter))
    }

    /// Test if the word occupies a cell
    pub fn covers(&self, row: usize, col: usize) -> bool {
        covers(self.row, self.col, self.length(), self.direction, row, col)
    }

    /// Letter the word writes into a cell, if it occupies it
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.cells()
            .find(|&(cell, _)| cell == (row, col))
            .map(|(_, letter)| letter)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {}) {}",
            self.word, self.row, self.col, self.direction
        )
    }
}

const fn covers(
    origin_row: usize,
    origin_col: usize,
    length: usize,
    direction: Direction,
    row: usize,
    col: usize,
) -> bool {
    match direction {
        Direction::Across => row == origin_row && col >= origin_col && col < origin_col + length,
        Direction::Down => col == origin_col && row >= origin_row && row < origin_row + length,
    }
}
