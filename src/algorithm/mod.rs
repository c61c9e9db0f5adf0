/// Memoization of pattern queries
pub mod cache;
/// Per-solve ledgers and counters
pub mod context;
/// Removal of crossing words from blocked slots
pub mod eviction;
/// Greedy forward fill
pub mod filling;
/// Candidate and eviction ordering
pub mod ranking;
/// Repair of complete grids that spell unknown words
pub mod repair;
/// Explicit-stack backtracking search
pub mod search;
/// Solver configuration and orchestration
pub mod solver;
/// Bitset over dictionary word ids
pub mod wordset;
