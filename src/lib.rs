//! Crossword grid auto-filler
//!
//! A dictionary is loaded into a prefix tree that answers exact-length
//! wildcard queries. Grids are filled by a greedy pass followed by a
//! backtracking search that evicts crossing words from blocked slots and
//! repairs complete grids that spell unknown words.

#![forbid(unsafe_code)]

/// Filling, search, eviction, repair and candidate ranking
pub mod algorithm;
/// Word storage and pattern queries
pub mod dictionary;
/// Input/output operations and error handling
pub mod io;
/// Grid model, slots and placements
pub mod spatial;

pub use io::error::{FillError, Result};
