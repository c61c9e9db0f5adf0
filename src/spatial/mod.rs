//! Spatial data structures and grid manipulation
//!
//! This module contains the grid model:
//! - Cell symbols and orientations
//! - Slot derivation and placements
//! - Grid mutation and validation

/// Cell symbols and slot orientation
pub mod cell;
/// Grid state, placement and validation
pub mod grid;
/// Slots, anchors and placements
pub mod slots;

pub use cell::{Cell, Direction};
pub use grid::Grid;
pub use slots::{Anchor, Placement, Slot};
