//! Backtracking search over slots and candidates
//!
//! The search keeps its own stack of frames instead of recursing, so depth is
//! bounded by configuration rather than by the thread's stack. A frame walks
//! the slots derived when it was entered. Trying a candidate or evicting a
//! crossing word pushes a child frame; when a child fails, the parent rolls
//! the grid back to the checkpoint taken just before it descended.

use crate::algorithm::context::SolveContext;
use crate::algorithm::eviction::{evict, select_victim};
use crate::algorithm::repair::repair_pass;
use crate::algorithm::solver::{LedgerScope, SolveStatus, SolverConfig, StopReason};
use crate::algorithm::wordset::WordSet;
use crate::dictionary::WordId;
use crate::io::error::Result;
use crate::io::events::{FillObserver, Phase, RemovalReason, SolveEvent};
use crate::spatial::{Anchor, Grid, Placement, Slot};

// Grid state, and for branch-scoped ledgers the removal ledger, before a descent
#[derive(Debug)]
struct Checkpoint {
    grid: Grid,
    removed: Option<WordSet>,
}

impl Checkpoint {
    fn capture(grid: &Grid, ctx: &SolveContext<'_>, scope: LedgerScope) -> Self {
        Self {
            grid: grid.clone(),
            removed: (scope == LedgerScope::Branch).then(|| ctx.removed.clone()),
        }
    }

    fn restore(self, grid: &mut Grid, ctx: &mut SolveContext<'_>) {
        *grid = self.grid;
        if let Some(removed) = self.removed {
            ctx.removed = removed;
        }
    }
}

// Change a frame made before pushing its child
#[derive(Debug)]
enum Branch {
    Placed {
        anchor: Anchor,
        id: WordId,
        placement: Placement,
        checkpoint: Checkpoint,
    },
    Evicted {
        checkpoint: Checkpoint,
    },
}

#[derive(Debug)]
enum Stage {
    Enter,
    Slot,
    Candidates {
        candidates: Vec<WordId>,
        next: usize,
        had_candidates: bool,
    },
    Exhausted {
        had_candidates: bool,
    },
}

enum Transition {
    Stay,
    Descend(Branch),
    Fail,
    Succeed,
}

#[derive(Debug)]
struct Frame {
    slots: Vec<Slot>,
    cursor: usize,
    stage: Stage,
    pending: Option<Branch>,
}

impl Frame {
    const fn new() -> Self {
        Self {
            slots: Vec::new(),
            cursor: 0,
            stage: Stage::Enter,
            pending: None,
        }
    }

    fn current_slot(&self) -> Option<Slot> {
        self.slots.get(self.cursor).copied()
    }

    fn advance(&mut self) -> Transition {
        self.cursor += 1;
        self.stage = Stage::Slot;
        Transition::Stay
    }

    fn step(
        &mut self,
        grid: &mut Grid,
        ctx: &mut SolveContext<'_>,
        config: &SolverConfig,
        observer: &mut dyn FillObserver,
    ) -> Result<Transition> {
        match std::mem::replace(&mut self.stage, Stage::Slot) {
            Stage::Enter => self.enter(grid, ctx, config, observer),
            Stage::Slot => Ok(self.open_slot(grid, ctx, config)),
            Stage::Candidates {
                candidates,
                next,
                had_candidates,
            } => self.try_candidates(grid, ctx, config, observer, candidates, next, had_candidates),
            Stage::Exhausted { had_candidates } => {
                Ok(self.unblock(grid, ctx, config, observer, had_candidates))
            }
        }
    }

    fn enter(
        &mut self,
        grid: &mut Grid,
        ctx: &mut SolveContext<'_>,
        config: &SolverConfig,
        observer: &mut dyn FillObserver,
    ) -> Result<Transition> {
        if grid.is_complete() {
            if grid.validate(ctx.index()) {
                return Ok(Transition::Succeed);
            }
            if ctx.repair_passes >= config.max_repair_passes {
                return Ok(Transition::Fail);
            }
            repair_pass(grid, ctx, observer)?;
            self.stage = Stage::Enter;
            return Ok(Transition::Stay);
        }

        self.slots = grid.find_slots();
        self.cursor = 0;
        self.stage = Stage::Slot;
        Ok(Transition::Stay)
    }

    fn open_slot(
        &mut self,
        grid: &Grid,
        ctx: &mut SolveContext<'_>,
        config: &SolverConfig,
    ) -> Transition {
        let Some(slot) = self.current_slot() else {
            return Transition::Fail;
        };
        let anchor = slot.anchor();
        if grid.placement_at(anchor).is_some() || ctx.attempts_at(anchor) >= config.retry_limit {
            return self.advance();
        }

        let candidates = ctx.candidates(grid, &slot);
        self.stage = Stage::Candidates {
            had_candidates: candidates
                .iter()
                .any(|&id| is_usable(grid, ctx, &slot, id)),
            candidates,
            next: 0,
        };
        Transition::Stay
    }

    #[allow(clippy::too_many_arguments)]
    fn try_candidates(
        &mut self,
        grid: &mut Grid,
        ctx: &mut SolveContext<'_>,
        config: &SolverConfig,
        observer: &mut dyn FillObserver,
        candidates: Vec<WordId>,
        mut next: usize,
        had_candidates: bool,
    ) -> Result<Transition> {
        let Some(slot) = self.current_slot() else {
            return Ok(Transition::Fail);
        };
        let anchor = slot.anchor();

        while ctx.attempts_at(anchor) < config.retry_limit {
            let Some(&id) = candidates.get(next) else {
                break;
            };
            next += 1;

            if !is_usable(grid, ctx, &slot, id) {
                continue;
            }

            let checkpoint = Checkpoint::capture(grid, ctx, config.ledger_scope);
            let placement = grid.place(ctx.word(id), &slot)?;
            ctx.stats.placements += 1;
            observer.on_event(&SolveEvent::Placed(&placement));
            observer.on_event(&SolveEvent::Snapshot(grid));

            self.stage = Stage::Candidates {
                candidates,
                next,
                had_candidates,
            };
            return Ok(Transition::Descend(Branch::Placed {
                anchor,
                id,
                placement,
                checkpoint,
            }));
        }

        self.stage = Stage::Exhausted { had_candidates };
        Ok(Transition::Stay)
    }

    // A slot with no usable candidate, or out of retries, evicts a crossing word
    fn unblock(
        &mut self,
        grid: &mut Grid,
        ctx: &mut SolveContext<'_>,
        config: &SolverConfig,
        observer: &mut dyn FillObserver,
        had_candidates: bool,
    ) -> Transition {
        let Some(slot) = self.current_slot() else {
            return Transition::Fail;
        };
        let anchor = slot.anchor();
        let blocked = !had_candidates || ctx.attempts_at(anchor) >= config.retry_limit;
        if !blocked {
            return self.advance();
        }
        if grid.is_complete() && grid.validate(ctx.index()) {
            return Transition::Succeed;
        }

        let Some((victim, id)) = select_victim(grid, ctx, &slot, config.max_evictions_per_word)
        else {
            return self.advance();
        };
        let checkpoint = Checkpoint::capture(grid, ctx, config.ledger_scope);
        if evict(grid, ctx, victim, id, observer).is_none() {
            return self.advance();
        }
        ctx.reset_attempts(anchor);
        self.advance();
        Transition::Descend(Branch::Evicted { checkpoint })
    }

    // Undo the branch whose child frame just failed
    fn resume_after_failure(
        &mut self,
        grid: &mut Grid,
        ctx: &mut SolveContext<'_>,
        observer: &mut dyn FillObserver,
    ) {
        match self.pending.take() {
            Some(Branch::Placed {
                anchor,
                id,
                placement,
                checkpoint,
            }) => {
                checkpoint.restore(grid, ctx);
                observer.on_event(&SolveEvent::Removed {
                    placement: &placement,
                    reason: RemovalReason::Backtrack,
                });
                observer.on_event(&SolveEvent::Snapshot(grid));
                ctx.removed.insert(id);
                ctx.record_attempt(anchor);
                ctx.mark_tried(anchor, id);
                ctx.stats.backtracks += 1;
            }
            Some(Branch::Evicted { checkpoint }) => {
                checkpoint.restore(grid, ctx);
                observer.on_event(&SolveEvent::Snapshot(grid));
            }
            None => {}
        }
    }
}

// Untried at the slot, not removed, not placed elsewhere, and fits its letters
fn is_usable(grid: &Grid, ctx: &SolveContext<'_>, slot: &Slot, id: WordId) -> bool {
    let word = ctx.word(id);
    !ctx.has_tried(slot.anchor(), id)
        && !ctx.removed.contains(id)
        && !grid.is_used(word)
        && grid.can_place(word, slot)
}

/// Search from the current grid state until it is complete and valid
///
/// Returns `Success` with the grid filled, or the reason the search stopped.
/// On failure the grid holds whatever state the root frame was left in.
///
/// # Errors
///
/// Returns `PlacementRejected` if a checked candidate is refused by the grid
pub fn search(
    grid: &mut Grid,
    ctx: &mut SolveContext<'_>,
    config: &SolverConfig,
    observer: &mut dyn FillObserver,
) -> Result<SolveStatus> {
    observer.on_event(&SolveEvent::PhaseStarted(Phase::Searching));

    let mut stack = vec![Frame::new()];
    ctx.stats.max_depth = ctx.stats.max_depth.max(1);

    loop {
        let depth = stack.len();
        let Some(frame) = stack.last_mut() else {
            return Ok(SolveStatus::Failure(StopReason::Exhausted));
        };

        ctx.stats.steps += 1;
        if ctx.stats.steps > config.max_steps {
            return Ok(SolveStatus::Failure(StopReason::StepBudget));
        }

        match frame.step(grid, ctx, config, observer)? {
            Transition::Stay => {}
            Transition::Succeed => return Ok(SolveStatus::Success),
            Transition::Descend(branch) => {
                frame.pending = Some(branch);
                if depth >= config.max_depth {
                    // Too deep to explore; the child fails without running
                    frame.resume_after_failure(grid, ctx, observer);
                } else {
                    stack.push(Frame::new());
                    ctx.stats.max_depth = ctx.stats.max_depth.max(depth + 1);
                }
            }
            Transition::Fail => {
                stack.pop();
                if let Some(parent) = stack.last_mut() {
                    parent.resume_after_failure(grid, ctx, observer);
                }
            }
        }
    }
}
