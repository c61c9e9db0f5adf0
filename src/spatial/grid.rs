//! Grid model: cell matrix, active placements and slot derivation
//!
//! The grid owns both the letters and the list of placements that put them
//! there, so removing a word can tell which letters are still claimed by a
//! crossing word. Letters present in the input are givens and survive every
//! removal.

use ndarray::Array2;
use std::fmt;
use std::str::FromStr;

use crate::dictionary::WordIndex;
use crate::io::error::{FillError, invalid_parameter};
use crate::spatial::cell::{Cell, Direction};
use crate::spatial::slots::{Anchor, Placement, Slot, order_slots};

/// Mutable crossword grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    givens: Array2<bool>,
    placements: Vec<Placement>,
}

impl Grid {
    /// Create a grid with every cell empty
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_cells(Array2::from_elem((rows, cols), Cell::Empty))
    }

    /// Wrap a cell matrix, treating its letters as givens
    pub fn from_cells(cells: Array2<Cell>) -> Self {
        let givens = cells.map(|cell| cell.letter().is_some());
        Self {
            cells,
            givens,
            placements: Vec::new(),
        }
    }

    /// Get the number of rows in the grid
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Get the number of columns in the grid
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell at a position, `None` outside the grid
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get([row, col]).copied()
    }

    /// Test if a letter at this position came with the input
    pub fn is_given(&self, row: usize, col: usize) -> bool {
        self.givens.get([row, col]).copied().unwrap_or(false)
    }

    /// Active placements in placement order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Test if a word is already placed anywhere
    pub fn is_used(&self, word: &str) -> bool {
        self.placements.iter().any(|placement| placement.word == word)
    }

    /// Placement occupying the slot with this anchor
    pub fn placement_at(&self, anchor: Anchor) -> Option<&Placement> {
        self.placements
            .iter()
            .find(|placement| placement.anchor() == anchor)
    }

    /// Derive every slot, most constrained first
    ///
    /// Rows are scanned before columns; see [`order_slots`] for the ordering.
    pub fn find_slots(&self) -> Vec<Slot> {
        let mut slots: Vec<Slot> = [Direction::Across, Direction::Down]
            .into_iter()
            .flat_map(|direction| self.runs(direction))
            .map(|mut slot| {
                slot.fixed_count = slot
                    .cells()
                    .filter(|&(row, col)| self.has_letter(row, col))
                    .count();
                slot.cross_count = slot
                    .cells()
                    .filter(|&(row, col)| self.has_filled_neighbour(row, col, slot.direction))
                    .count();
                slot
            })
            .collect();
        order_slots(&mut slots);
        slots
    }

    /// Usable length from the slot origin and the partially known pattern
    ///
    /// Scanning stops at a blocked cell or the grid edge. Unresolved cells
    /// become the `?` wildcard.
    pub fn pattern_for(&self, slot: &Slot) -> (usize, String) {
        let pattern: String = (0..)
            .map(|step| slot.direction.offset(slot.row, slot.col, step))
            .map_while(|(row, col)| self.cell(row, col).filter(|cell| !cell.is_blocked()))
            .map(Cell::symbol)
            .collect();
        (pattern.chars().count(), pattern)
    }

    /// Test if a word fits the slot without overwriting a different letter
    pub fn can_place(&self, word: &str, slot: &Slot) -> bool {
        word.chars().count() == slot.length
            && slot
                .cells()
                .zip(word.chars())
                .all(|((row, col), letter)| match self.cell(row, col) {
                    Some(Cell::Empty) => true,
                    Some(Cell::Letter(existing)) => existing == letter,
                    Some(Cell::Blocked) | None => false,
                })
    }

    /// Write a word into a slot and record the placement
    ///
    /// # Errors
    ///
    /// Returns `PlacementRejected` if the word does not fit the slot or is
    /// already placed elsewhere
    pub fn place(&mut self, word: &str, slot: &Slot) -> crate::Result<Placement> {
        let reason = if !self.can_place(word, slot) {
            Some("letters conflict with the slot")
        } else if self.is_used(word) {
            Some("word is already placed")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(FillError::PlacementRejected {
                word: word.to_owned(),
                row: slot.row,
                col: slot.col,
                direction: slot.direction,
                reason,
            });
        }

        let placement = Placement::new(word, slot.row, slot.col, slot.direction);
        for ((row, col), letter) in placement.cells() {
            if let Some(cell) = self.cells.get_mut([row, col]) {
                *cell = Cell::Letter(letter);
            }
        }
        self.placements.push(placement.clone());
        Ok(placement)
    }

    /// Remove an active placement, keeping letters that are still claimed
    ///
    /// A cell goes back to empty only if it still holds this word's letter,
    /// is not a given, and no perpendicular placement covers it. Returns
    /// `false` if the placement was not active.
    pub fn remove(&mut self, placement: &Placement) -> bool {
        let Some(position) = self.placements.iter().position(|p| p == placement) else {
            return false;
        };
        self.placements.remove(position);

        let crossing = placement.direction.perpendicular();
        for ((row, col), letter) in placement.cells() {
            let claimed = self.is_given(row, col)
                || self
                    .placements
                    .iter()
                    .any(|other| other.direction == crossing && other.covers(row, col));
            if claimed {
                continue;
            }
            if let Some(cell) = self.cells.get_mut([row, col]) {
                if *cell == Cell::Letter(letter) {
                    *cell = Cell::Empty;
                }
            }
        }
        true
    }

    /// Test if no cell is left unresolved
    pub fn is_complete(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Every run longer than one cell with the text it currently spells
    ///
    /// Across runs come first, then down runs, each in scan order.
    pub fn all_formed_words(&self) -> Vec<Placement> {
        [Direction::Across, Direction::Down]
            .into_iter()
            .flat_map(|direction| self.runs(direction))
            .map(|slot| {
                let word: String = slot
                    .cells()
                    .filter_map(|(row, col)| self.cell(row, col))
                    .map(Cell::symbol)
                    .collect();
                Placement::new(word, slot.row, slot.col, slot.direction)
            })
            .collect()
    }

    /// Formed words missing from the dictionary
    pub fn invalid_words(&self, index: &WordIndex) -> Vec<Placement> {
        self.all_formed_words()
            .into_iter()
            .filter(|formed| !index.contains(&formed.word))
            .collect()
    }

    /// Test if every formed word is a dictionary word
    pub fn validate(&self, index: &WordIndex) -> bool {
        self.all_formed_words()
            .iter()
            .all(|formed| index.contains(&formed.word))
    }

    /// Active perpendicular placements overlapping any cell of the slot
    pub fn find_intersecting(&self, slot: &Slot) -> Vec<Placement> {
        let crossing = slot.direction.perpendicular();
        self.placements
            .iter()
            .filter(|placement| {
                placement.direction == crossing
                    && slot.cells().any(|(row, col)| placement.covers(row, col))
            })
            .cloned()
            .collect()
    }

    fn has_letter(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).and_then(Cell::letter).is_some()
    }

    fn has_filled_neighbour(&self, row: usize, col: usize, direction: Direction) -> bool {
        let (before, after) = match direction {
            Direction::Across => (row.checked_sub(1).map(|r| (r, col)), (row + 1, col)),
            Direction::Down => (col.checked_sub(1).map(|c| (row, c)), (row, col + 1)),
        };
        before.is_some_and(|(r, c)| self.has_letter(r, c)) || self.has_letter(after.0, after.1)
    }

    // Maximal non-blocked runs longer than one cell, unannotated
    fn runs(&self, direction: Direction) -> Vec<Slot> {
        let (lines, span) = match direction {
            Direction::Across => (self.rows(), self.cols()),
            Direction::Down => (self.cols(), self.rows()),
        };

        let mut runs = Vec::new();
        for line in 0..lines {
            let mut start = None;
            for position in 0..=span {
                let (row, col) = direction.locate(line, position);
                let open = position < span && self.cell(row, col).is_some_and(|c| !c.is_blocked());
                match (open, start) {
                    (true, None) => start = Some(position),
                    (false, Some(begin)) => {
                        if position - begin > 1 {
                            let (row, col) = direction.locate(line, begin);
                            runs.push(Slot::new(row, col, position - begin, direction));
                        }
                        start = None;
                    }
                    _ => {}
                }
            }
        }
        runs
    }
}

impl FromStr for Grid {
    type Err = FillError;

    /// Parse one row per non-blank line, trimming surrounding whitespace
    fn from_str(text: &str) -> std::result::Result<Self, Self::Err> {
        let lines: Vec<Vec<Cell>> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(Cell::from_symbol).collect())
            .collect();

        let expected = lines.first().map(Vec::len).ok_or(FillError::EmptyGrid)?;
        if let Some((row, line)) = lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.len() != expected)
        {
            return Err(FillError::RaggedGrid {
                row,
                expected,
                found: line.len(),
            });
        }

        let rows = lines.len();
        let cells = Array2::from_shape_vec((rows, expected), lines.into_iter().flatten().collect())
            .map_err(|err| invalid_parameter("grid", &format!("{rows}x{expected}"), &err))?;
        Ok(Self::from_cells(cells))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
