use crate::dictionary::WordId;
use bitvec::prelude::*;
use std::fmt;

/// Growable bitset over dictionary word ids
///
/// Backs the removal ledger and the per-slot tried sets. Sized to the
/// dictionary up front, but grows if handed an id beyond its capacity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSet {
    bits: BitVec,
}

impl WordSet {
    /// Create a set with room for `capacity` words and none present
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Insert a word, returning `true` if it was not already present
    pub fn insert(&mut self, id: WordId) -> bool {
        let index = id.index();
        if index >= self.bits.len() {
            self.bits.resize(index + 1, false);
        }
        let fresh = !self.contains(id);
        self.bits.set(index, true);
        fresh
    }

    /// Remove a word, returning `true` if it was present
    pub fn remove(&mut self, id: WordId) -> bool {
        let present = self.contains(id);
        if present {
            self.bits.set(id.index(), false);
        }
        present
    }

    /// Test word membership
    pub fn contains(&self, id: WordId) -> bool {
        self.bits.get(id.index()).as_deref() == Some(&true)
    }

    /// Test if no words are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count words in the set
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Remove every word, keeping capacity
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Raw positions of present words in ascending order
    pub fn indices(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordSet({} words: {:?})", self.len(), self.indices())
    }
}
