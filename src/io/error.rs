//! Error types for loading, solving and writing grids

use crate::spatial::cell::Direction;
use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all fill operations
///
/// An unsatisfiable puzzle is not an error at this level: the solver reports
/// it through its status. Only malformed inputs, file system faults and broken
/// placement invariants end up here.
#[derive(Debug)]
pub enum FillError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Word list contained no usable words
    EmptyDictionary {
        /// Path of the word list
        path: PathBuf,
    },

    /// Grid text contained no rows
    EmptyGrid,

    /// Grid rows have different widths
    RaggedGrid {
        /// Zero-based row that broke the width
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// Word cannot be written into the requested slot
    PlacementRejected {
        /// Word that was rejected
        word: String,
        /// Slot origin row
        row: usize,
        /// Slot origin column
        col: usize,
        /// Slot orientation
        direction: Direction,
        /// Which placement rule failed
        reason: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Some grids could not be filled within the configured limits
    Unsolved {
        /// Number of grids left unsolved
        failed: usize,
        /// Number of grids attempted
        total: usize,
    },
}

impl fmt::Display for FillError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::EmptyDictionary { path } => {
                write!(f, "Dictionary '{}' contains no usable words", path.display())
            }
            Self::EmptyGrid => write!(f, "Grid contains no rows"),
            Self::RaggedGrid {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Grid row {row} has {found} cells but the first row has {expected}"
                )
            }
            Self::PlacementRejected {
                word,
                row,
                col,
                direction,
                reason,
            } => {
                write!(
                    f,
                    "Cannot place '{word}' at ({row}, {col}) {direction}: {reason}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Unsolved { failed, total } => {
                write!(f, "{failed} of {total} grids could not be filled")
            }
        }
    }
}

impl std::error::Error for FillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for fill results
pub type Result<T> = std::result::Result<T, FillError>;

impl From<std::io::Error> for FillError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> FillError {
    FillError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error tied to a path
pub fn file_system(path: &Path, operation: &'static str, source: std::io::Error) -> FillError {
    FillError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
