//! Solver configuration, orchestration and reporting
//!
//! A solve runs a precheck for slot lengths the dictionary cannot supply, then
//! a greedy fill, then the backtracking search. The grid is mutated in place;
//! on success it holds the filled puzzle.

use crate::algorithm::context::{SolveContext, SolveStats};
use crate::algorithm::{filling, search};
use crate::dictionary::WordIndex;
use crate::io::configuration::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_EVICTIONS_PER_WORD, DEFAULT_MAX_REPAIR_PASSES,
    DEFAULT_MAX_STEPS, DEFAULT_RETRY_LIMIT,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::events::{FillObserver, SolveEvent};
use crate::spatial::{Grid, Placement};

/// How long a removed word stays excluded from candidates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LedgerScope {
    /// For the rest of the solve; every failed or evicted word is gone for good
    #[default]
    Global,
    /// Until the branch that removed it is abandoned
    Branch,
}

/// Tunable limits for a solve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Failed placements tolerated at one slot before it is skipped
    pub retry_limit: usize,
    /// Deepest search frame stack allowed
    pub max_depth: usize,
    /// Times a single word may be evicted
    pub max_evictions_per_word: usize,
    /// Repair passes allowed over complete but invalid grids
    pub max_repair_passes: usize,
    /// Search frame steps before giving up
    pub max_steps: usize,
    /// Lifetime of removal ledger entries
    pub ledger_scope: LedgerScope,
    /// Seed for shuffling equally ranked candidates; `None` keeps query order
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            retry_limit: DEFAULT_RETRY_LIMIT,
            max_depth: DEFAULT_MAX_DEPTH,
            max_evictions_per_word: DEFAULT_MAX_EVICTIONS_PER_WORD,
            max_repair_passes: DEFAULT_MAX_REPAIR_PASSES,
            max_steps: DEFAULT_MAX_STEPS,
            ledger_scope: LedgerScope::Global,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Check that every limit allows the search to make progress
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero retry limit, depth or step budget
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("retry_limit", self.retry_limit),
            ("max_depth", self.max_depth),
            ("max_steps", self.max_steps),
        ];
        for (parameter, value) in limits {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
            }
        }
        Ok(())
    }
}

/// Why a solve ended without a valid fill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// Every slot, candidate and eviction was exhausted
    Exhausted,
    /// A slot length has no dictionary words at all
    MissingLength {
        /// Slot length with no words
        length: usize,
    },
    /// The step budget ran out
    StepBudget,
}

/// Terminal solver state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    /// Grid is complete and every run is a dictionary word
    Success,
    /// Search gave up; the grid holds whatever partial state remained
    Failure(StopReason),
}

/// Result of a solve
#[derive(Clone, Debug)]
pub struct SolveReport {
    /// How the solve ended
    pub status: SolveStatus,
    /// Placements active when the solve ended
    pub placements: Vec<Placement>,
    /// Work counters
    pub stats: SolveStats,
}

impl SolveReport {
    /// Test if the grid was filled
    pub const fn is_success(&self) -> bool {
        matches!(self.status, SolveStatus::Success)
    }
}

/// Crossword filler over a fixed dictionary
#[derive(Clone, Copy, Debug)]
pub struct Solver<'a> {
    index: &'a WordIndex,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver drawing words from `index`
    pub const fn new(index: &'a WordIndex, config: SolverConfig) -> Self {
        Self { index, config }
    }

    /// Limits in effect
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Fill the grid in place
    ///
    /// An unsatisfiable grid is reported through the returned status, not as
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is unusable, or
    /// `PlacementRejected` if a placement invariant is broken
    pub fn solve(
        &self,
        grid: &mut Grid,
        observer: &mut dyn FillObserver,
    ) -> Result<SolveReport> {
        self.config.validate()?;
        let mut ctx = SolveContext::new(self.index, &self.config);

        let status = if let Some(length) = self.missing_length(grid) {
            SolveStatus::Failure(StopReason::MissingLength { length })
        } else {
            filling::fill(grid, &mut ctx, observer)?;
            search::search(grid, &mut ctx, &self.config, observer)?
        };

        let stats = ctx.final_stats();
        let success = matches!(status, SolveStatus::Success);
        observer.on_event(&SolveEvent::Finished {
            success,
            stats: &stats,
        });

        Ok(SolveReport {
            status,
            placements: grid.placements().to_vec(),
            stats,
        })
    }

    // A slot whose length no word has can never be filled
    fn missing_length(&self, grid: &Grid) -> Option<usize> {
        grid.find_slots()
            .into_iter()
            .map(|slot| slot.length)
            .find(|&length| self.index.words_of_length(length).is_empty())
    }
}
