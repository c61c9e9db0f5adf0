//! Freeing a blocked slot by removing a crossing word
//!
//! When a slot has no usable candidate, one of the perpendicular placements
//! running through it is removed and banned. Each word can only be evicted a
//! bounded number of times per solve.

use crate::algorithm::context::SolveContext;
use crate::algorithm::ranking::rank_for_eviction;
use crate::dictionary::WordId;
use crate::io::events::{FillObserver, RemovalReason, SolveEvent};
use crate::spatial::{Grid, Placement, Slot};

/// Record of a completed eviction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvictionResult {
    /// Placement that was removed
    pub evicted: Placement,
    /// Times this word has now been evicted
    pub evictions_of_word: usize,
}

/// Pick the crossing placement to evict from a blocked slot
///
/// Crossing placements are ranked with [`rank_for_eviction`]; the first one
/// that is a dictionary word still under the eviction cap is chosen.
pub fn select_victim(
    grid: &Grid,
    ctx: &SolveContext<'_>,
    slot: &Slot,
    cap: usize,
) -> Option<(Placement, WordId)> {
    let mut crossing = grid.find_intersecting(slot);
    rank_for_eviction(&mut crossing, grid.placements());
    crossing.into_iter().find_map(|placement| {
        let id = ctx.index().id_of(&placement.word)?;
        (ctx.evictions_of(id) < cap).then_some((placement, id))
    })
}

/// Remove a victim from the grid and ban it from further candidates
///
/// Returns `None` if the victim was no longer placed.
pub fn evict(
    grid: &mut Grid,
    ctx: &mut SolveContext<'_>,
    victim: Placement,
    id: WordId,
    observer: &mut dyn FillObserver,
) -> Option<EvictionResult> {
    if !grid.remove(&victim) {
        return None;
    }
    ctx.removed.insert(id);
    let evictions_of_word = ctx.record_eviction(id);
    ctx.stats.evictions += 1;

    observer.on_event(&SolveEvent::Removed {
        placement: &victim,
        reason: RemovalReason::Eviction,
    });
    observer.on_event(&SolveEvent::Snapshot(grid));

    Some(EvictionResult {
        evicted: victim,
        evictions_of_word,
    })
}
