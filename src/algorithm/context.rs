//! Per-solve mutable state
//!
//! A context is created fresh for every call to `Solver::solve` and threaded
//! by reference through filling, search, eviction and repair. Nothing survives
//! from one solve to the next.

use crate::algorithm::cache::PatternCache;
use crate::algorithm::ranking::rank_word_ids;
use crate::algorithm::solver::SolverConfig;
use crate::algorithm::wordset::WordSet;
use crate::dictionary::{WordId, WordIndex};
use crate::spatial::{Anchor, Grid, Slot};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Counters describing the work a solve performed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Search frame steps taken
    pub steps: usize,
    /// Words written into the grid
    pub placements: usize,
    /// Placements rolled back after their branch failed
    pub backtracks: usize,
    /// Placements evicted to unblock a slot
    pub evictions: usize,
    /// Repair passes over complete but invalid grids
    pub repair_passes: usize,
    /// Deepest frame stack reached
    pub max_depth: usize,
    /// Pattern queries answered from the cache
    pub cache_hits: usize,
    /// Pattern queries sent to the index
    pub cache_misses: usize,
}

/// Ledgers and caches for one solve
#[derive(Debug)]
pub struct SolveContext<'a> {
    index: &'a WordIndex,
    /// Words excluded from candidate generation
    pub removed: WordSet,
    tried: HashMap<Anchor, WordSet>,
    attempts: HashMap<Anchor, usize>,
    evictions: HashMap<WordId, usize>,
    /// Repair passes run so far
    pub repair_passes: usize,
    /// Pattern query memo
    pub cache: PatternCache,
    rng: Option<StdRng>,
    /// Work counters
    pub stats: SolveStats,
}

impl<'a> SolveContext<'a> {
    /// Create empty ledgers for a solve over `index`
    pub fn new(index: &'a WordIndex, config: &SolverConfig) -> Self {
        Self {
            index,
            removed: WordSet::new(index.len()),
            tried: HashMap::new(),
            attempts: HashMap::new(),
            evictions: HashMap::new(),
            repair_passes: 0,
            cache: PatternCache::new(),
            rng: config.seed.map(StdRng::seed_from_u64),
            stats: SolveStats::default(),
        }
    }

    /// Dictionary the solve draws from
    pub const fn index(&self) -> &'a WordIndex {
        self.index
    }

    /// Text of a dictionary word
    pub fn word(&self, id: WordId) -> &'a str {
        self.index.word(id).unwrap_or_default()
    }

    /// Ranked candidates for a slot's current pattern
    ///
    /// Matches of the wrong length and removed words are dropped. With a seed
    /// configured, equally ranked words are shuffled before the stable sort.
    pub fn candidates(&mut self, grid: &Grid, slot: &Slot) -> Vec<WordId> {
        let (length, pattern) = grid.pattern_for(slot);
        let index = self.index;
        let mut candidates: Vec<WordId> = self
            .cache
            .get_or_query(index, &pattern)
            .iter()
            .copied()
            .filter(|&id| !self.removed.contains(id))
            .filter(|&id| index.word(id).is_some_and(|word| word.chars().count() == length))
            .collect();

        if let Some(rng) = self.rng.as_mut() {
            candidates.shuffle(rng);
        }
        rank_word_ids(index, &mut candidates);
        candidates
    }

    /// Failed placements recorded at a slot since its last reset
    pub fn attempts_at(&self, anchor: Anchor) -> usize {
        self.attempts.get(&anchor).copied().unwrap_or(0)
    }

    /// Count a failed placement at a slot
    pub fn record_attempt(&mut self, anchor: Anchor) {
        *self.attempts.entry(anchor).or_insert(0) += 1;
    }

    /// Clear a slot's failure count
    pub fn reset_attempts(&mut self, anchor: Anchor) {
        self.attempts.insert(anchor, 0);
    }

    /// Test if a word already failed at a slot
    pub fn has_tried(&self, anchor: Anchor, id: WordId) -> bool {
        self.tried.get(&anchor).is_some_and(|tried| tried.contains(id))
    }

    /// Remember that a word failed at a slot
    pub fn mark_tried(&mut self, anchor: Anchor, id: WordId) {
        let capacity = self.index.len();
        self.tried
            .entry(anchor)
            .or_insert_with(|| WordSet::new(capacity))
            .insert(id);
    }

    /// Times a word has been evicted in this solve
    pub fn evictions_of(&self, id: WordId) -> usize {
        self.evictions.get(&id).copied().unwrap_or(0)
    }

    /// Count an eviction of a word, returning the new total
    pub fn record_eviction(&mut self, id: WordId) -> usize {
        let count = self.evictions.entry(id).or_insert(0);
        *count += 1;
        *count
    }

    /// Counters with the cache figures folded in
    pub const fn final_stats(&self) -> SolveStats {
        let mut stats = self.stats;
        stats.cache_hits = self.cache.stats.hits;
        stats.cache_misses = self.cache.stats.misses;
        stats
    }
}
