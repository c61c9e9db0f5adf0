//! Solve events and the observers that consume them
//!
//! The solver never logs or prints on its own. Every placement, removal and
//! grid change is reported to an injected [`FillObserver`], which may log it,
//! record it, drive a progress display, or ignore it.

use crate::algorithm::context::SolveStats;
use crate::spatial::{Grid, Placement};
use tracing::{Level, debug, info, trace};

/// Solver state a phase event announces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Greedy forward fill
    Filling,
    /// Backtracking search
    Searching,
    /// Correction of a complete grid that spells unknown words
    RepairingInvalid,
}

impl Phase {
    /// Short human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Filling => "filling",
            Self::Searching => "searching",
            Self::RepairingInvalid => "repairing",
        }
    }
}

/// Why a placement left the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalReason {
    /// Its branch failed and the grid was rolled back
    Backtrack,
    /// It crossed a blocked slot
    Eviction,
    /// It crossed or formed an invalid word
    Repair,
}

/// Observable step of a solve
#[derive(Debug)]
pub enum SolveEvent<'a> {
    /// Solver entered a phase
    PhaseStarted(Phase),
    /// Word written into the grid
    Placed(&'a Placement),
    /// Word taken out of the grid
    Removed {
        /// Placement that was removed
        placement: &'a Placement,
        /// Cause of the removal
        reason: RemovalReason,
    },
    /// Complete grid spells a word missing from the dictionary
    InvalidWord(&'a Placement),
    /// Grid state after a mutation
    Snapshot(&'a Grid),
    /// Solve ended
    Finished {
        /// Whether the grid was filled
        success: bool,
        /// Final counters
        stats: &'a SolveStats,
    },
}

/// Receiver of solve events
pub trait FillObserver {
    /// Handle one event
    fn on_event(&mut self, event: &SolveEvent<'_>);
}

/// Observer that discards every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl FillObserver for NullObserver {
    fn on_event(&mut self, _event: &SolveEvent<'_>) {}
}

impl<T: FillObserver + ?Sized> FillObserver for &mut T {
    fn on_event(&mut self, event: &SolveEvent<'_>) {
        (**self).on_event(event);
    }
}

impl<T: FillObserver> FillObserver for Option<T> {
    fn on_event(&mut self, event: &SolveEvent<'_>) {
        if let Some(observer) = self {
            observer.on_event(event);
        }
    }
}

impl<A: FillObserver, B: FillObserver> FillObserver for (A, B) {
    fn on_event(&mut self, event: &SolveEvent<'_>) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
}

/// Remembers the last grid text so repeated snapshots can be dropped
#[derive(Clone, Debug, Default)]
pub struct SnapshotFilter {
    last: Option<String>,
}

impl SnapshotFilter {
    /// Rendered grid if it differs from the previous one seen
    pub fn changed(&mut self, grid: &Grid) -> Option<String> {
        let rendered = grid.to_string();
        if self.last.as_deref() == Some(rendered.as_str()) {
            return None;
        }
        self.last = Some(rendered.clone());
        Some(rendered)
    }
}

/// Observer that forwards events to `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver {
    snapshots: SnapshotFilter,
}

impl TracingObserver {
    /// Create an observer with no snapshot history
    pub fn new() -> Self {
        Self::default()
    }
}

impl FillObserver for TracingObserver {
    fn on_event(&mut self, event: &SolveEvent<'_>) {
        match event {
            SolveEvent::PhaseStarted(phase) => info!(phase = phase.label(), "phase started"),
            SolveEvent::Placed(placement) => debug!(%placement, "placed"),
            SolveEvent::Removed { placement, reason } => {
                debug!(%placement, ?reason, "removed");
            }
            SolveEvent::InvalidWord(formed) => info!(word = %formed, "invalid word in complete grid"),
            SolveEvent::Snapshot(grid) => {
                // Rendering every snapshot is wasted work unless trace is on
                if tracing::enabled!(Level::TRACE) {
                    if let Some(rendered) = self.snapshots.changed(grid) {
                        trace!("\n{rendered}");
                    }
                }
            }
            SolveEvent::Finished { success, stats } => info!(
                success,
                steps = stats.steps,
                placements = stats.placements,
                backtracks = stats.backtracks,
                evictions = stats.evictions,
                "solve finished"
            ),
        }
    }
}

/// Owned copy of a solve event
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// Solver entered a phase
    PhaseStarted(Phase),
    /// Word written into the grid
    Placed(Placement),
    /// Word taken out of the grid
    Removed(Placement, RemovalReason),
    /// Complete grid spelled an unknown word
    InvalidWord(Placement),
    /// Grid text after a change, deduplicated
    Snapshot(String),
    /// Solve ended
    Finished {
        /// Whether the grid was filled
        success: bool,
    },
}

/// Observer that keeps every event for later inspection
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<RecordedEvent>,
    snapshots: SnapshotFilter,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events in arrival order
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Every placement made, in order
    pub fn placed(&self) -> impl Iterator<Item = &Placement> {
        self.events.iter().filter_map(|event| match event {
            RecordedEvent::Placed(placement) => Some(placement),
            _ => None,
        })
    }

    /// Every removal made for a given reason, in order
    pub fn removed(&self, reason: RemovalReason) -> impl Iterator<Item = &Placement> {
        self.events.iter().filter_map(move |event| match event {
            RecordedEvent::Removed(placement, cause) if *cause == reason => Some(placement),
            _ => None,
        })
    }

    /// Phases entered, in order
    pub fn phases(&self) -> Vec<Phase> {
        self.events
            .iter()
            .filter_map(|event| match event {
                RecordedEvent::PhaseStarted(phase) => Some(*phase),
                _ => None,
            })
            .collect()
    }
}

impl FillObserver for EventLog {
    fn on_event(&mut self, event: &SolveEvent<'_>) {
        let recorded = match event {
            SolveEvent::PhaseStarted(phase) => RecordedEvent::PhaseStarted(*phase),
            SolveEvent::Placed(placement) => RecordedEvent::Placed((*placement).clone()),
            SolveEvent::Removed { placement, reason } => {
                RecordedEvent::Removed((*placement).clone(), *reason)
            }
            SolveEvent::InvalidWord(formed) => RecordedEvent::InvalidWord((*formed).clone()),
            SolveEvent::Snapshot(grid) => match self.snapshots.changed(grid) {
                Some(rendered) => RecordedEvent::Snapshot(rendered),
                None => return,
            },
            SolveEvent::Finished { success, .. } => RecordedEvent::Finished { success: *success },
        };
        self.events.push(recorded);
    }
}
