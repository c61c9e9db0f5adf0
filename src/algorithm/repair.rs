//! Correction of complete grids that spell unknown words
//!
//! A grid can fill up through crossing letters alone, leaving runs that no
//! placement ever checked. A repair pass clears each such run along with the
//! placements crossing it and refills it from the dictionary.

use crate::algorithm::context::SolveContext;
use crate::io::error::Result;
use crate::io::events::{FillObserver, Phase, RemovalReason, SolveEvent};
use crate::spatial::{Grid, Placement, Slot};

/// Outcome of one repair pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepairSummary {
    /// Formed words that were not in the dictionary
    pub invalid_words: Vec<Placement>,
    /// Words placed into cleared runs
    pub replaced: Vec<Placement>,
    /// Placements removed while clearing
    pub cleared: usize,
}

/// Run one repair pass over every invalid formed word
///
/// # Errors
///
/// Returns `PlacementRejected` if a checked replacement is refused by the grid
pub fn repair_pass(
    grid: &mut Grid,
    ctx: &mut SolveContext<'_>,
    observer: &mut dyn FillObserver,
) -> Result<RepairSummary> {
    ctx.repair_passes += 1;
    ctx.stats.repair_passes += 1;
    observer.on_event(&SolveEvent::PhaseStarted(Phase::RepairingInvalid));

    let mut summary = RepairSummary {
        invalid_words: grid.invalid_words(ctx.index()),
        ..RepairSummary::default()
    };

    for formed in &summary.invalid_words {
        observer.on_event(&SolveEvent::InvalidWord(formed));
        let slot = Slot::spanning(formed);

        let mut clearing = grid.find_intersecting(&slot);
        clearing.extend(grid.placement_at(slot.anchor()).cloned());
        for placement in &clearing {
            if grid.remove(placement) {
                summary.cleared += 1;
                observer.on_event(&SolveEvent::Removed {
                    placement,
                    reason: RemovalReason::Repair,
                });
            }
        }

        let replacement = ctx.candidates(grid, &slot).into_iter().find(|&id| {
            let word = ctx.word(id);
            !grid.is_used(word) && grid.can_place(word, &slot)
        });
        if let Some(id) = replacement {
            let placement = grid.place(ctx.word(id), &slot)?;
            ctx.stats.placements += 1;
            observer.on_event(&SolveEvent::Placed(&placement));
            summary.replaced.push(placement);
        }
        observer.on_event(&SolveEvent::Snapshot(grid));
    }

    Ok(summary)
}
