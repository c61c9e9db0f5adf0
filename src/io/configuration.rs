//! Solver constants and runtime configuration defaults

// Grid symbols
/// Cell that can never hold a letter
pub const BLOCKED: char = '.';
/// Fillable cell, doubling as the wildcard in pattern queries
pub const EMPTY: char = '?';

// Search limits
/// Failed placements tolerated at one slot before it is skipped
pub const DEFAULT_RETRY_LIMIT: usize = 10;
/// Times a single word may be evicted during one solve
pub const DEFAULT_MAX_EVICTIONS_PER_WORD: usize = 5;
/// Deepest search frame stack allowed
pub const DEFAULT_MAX_DEPTH: usize = 100_000;

// Repair passes restart the search without a convergence guarantee
/// Repair passes allowed over complete but invalid grids
pub const DEFAULT_MAX_REPAIR_PASSES: usize = 16;

/// Search frames stepped before the solve gives up
pub const DEFAULT_MAX_STEPS: usize = 2_000_000;

// Word scoring
/// Letters counted as vowels, matched case-insensitively
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
/// Characters that make a word a poor fill choice
pub const SPECIAL_CHARACTERS: &str = "&#$+!@*()-_/";
/// Score lost per special character
pub const SPECIAL_CHARACTER_PENALTY: i32 = 30;
/// Score lost per digit
pub const DIGIT_PENALTY: i32 = 20;
/// Score gained per ordinary character
pub const LETTER_REWARD: i32 = 1;

// Progress display settings
/// Spinner redraw interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 120;
/// Observed events between spinner message refreshes
pub const PROGRESS_REFRESH_INTERVAL: usize = 32;

// Output settings
/// Suffix added to filled grid filenames
pub const OUTPUT_SUFFIX: &str = "_filled";
/// Extension of grid files picked up from a directory target
pub const GRID_EXTENSION: &str = "txt";
