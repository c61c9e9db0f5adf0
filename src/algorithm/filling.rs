//! Greedy forward fill
//!
//! Places the best ranked usable word into the most constrained open slot,
//! recomputing slots after every placement, until no open slot has a usable
//! candidate. Nothing is undone here; dead ends are left for the search.

use crate::algorithm::context::SolveContext;
use crate::dictionary::WordId;
use crate::io::error::Result;
use crate::io::events::{FillObserver, Phase, SolveEvent};
use crate::spatial::{Grid, Slot};

/// Outcome of a greedy fill
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FillSummary {
    /// Words placed
    pub placed: usize,
    /// Whether the grid was left with no empty cell
    pub complete: bool,
}

/// Run the greedy fill to a fixed point
///
/// # Errors
///
/// Returns `PlacementRejected` if a checked candidate is refused by the grid
pub fn fill(
    grid: &mut Grid,
    ctx: &mut SolveContext<'_>,
    observer: &mut dyn FillObserver,
) -> Result<FillSummary> {
    observer.on_event(&SolveEvent::PhaseStarted(Phase::Filling));

    let mut placed = 0;
    while let Some((slot, id)) = next_greedy_move(grid, ctx) {
        let placement = grid.place(ctx.word(id), &slot)?;
        ctx.stats.placements += 1;
        placed += 1;
        observer.on_event(&SolveEvent::Placed(&placement));
        observer.on_event(&SolveEvent::Snapshot(grid));
    }

    Ok(FillSummary {
        placed,
        complete: grid.is_complete(),
    })
}

/// First open slot, in constraint order, with a usable candidate
///
/// A slot is open when no placement sits at its anchor. A candidate is usable
/// when it is not placed elsewhere and fits the slot's current letters.
pub fn next_greedy_move(grid: &Grid, ctx: &mut SolveContext<'_>) -> Option<(Slot, WordId)> {
    grid.find_slots()
        .into_iter()
        .filter(|slot| grid.placement_at(slot.anchor()).is_none())
        .find_map(|slot| {
            let chosen = ctx.candidates(grid, &slot).into_iter().find(|&id| {
                let word = ctx.word(id);
                !grid.is_used(word) && grid.can_place(word, &slot)
            })?;
            Some((slot, chosen))
        })
}
