use crate::dictionary::{WordId, WordIndex};
use std::collections::HashMap;

/// Memoization of pattern queries for one solve
///
/// The dictionary is read-only while solving, so a pattern's matches never
/// change. Search revisits the same partially filled slots many times.
#[derive(Default, Debug)]
pub struct PatternCache {
    /// Pattern text to matching word ids, in query order
    entries: HashMap<String, Vec<WordId>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl PatternCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve cached matches or query the index and store them
    pub fn get_or_query(&mut self, index: &WordIndex, pattern: &str) -> &[WordId] {
        use std::collections::hash_map::Entry;

        match self.entries.entry(pattern.to_owned()) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(index.query(pattern))
            }
        }
    }

    /// Number of distinct patterns cached
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if nothing has been cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
