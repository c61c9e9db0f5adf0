//! Dictionary storage and pattern lookup

/// Prefix tree with exact-length wildcard queries
pub mod trie;

pub use trie::{WordId, WordIndex};
