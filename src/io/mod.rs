//! Input/output operations, events and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Solver constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Solve events and observers
pub mod events;
/// Terminal progress display
pub mod progress;
/// Grid file reading and writing
pub mod puzzle;
/// Word list loading
pub mod wordlist;
