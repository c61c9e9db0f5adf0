//! Grid file reading and writing

use crate::io::configuration::OUTPUT_SUFFIX;
use crate::io::error::{Result, file_system};
use crate::spatial::Grid;
use std::path::{Path, PathBuf};

/// Parse a grid file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or `EmptyGrid` or
/// `RaggedGrid` if its contents are malformed
pub fn load_grid(path: &Path) -> Result<Grid> {
    let text = std::fs::read_to_string(path).map_err(|err| file_system(path, "read", err))?;
    text.parse()
}

/// Write a grid, one line per row
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be written
pub fn write_grid(grid: &Grid, path: &Path) -> Result<()> {
    std::fs::write(path, format!("{grid}\n")).map_err(|err| file_system(path, "write", err))
}

/// Default location of the filled grid for an input file
pub fn output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let name = match input.extension() {
        Some(extension) => format!(
            "{}{OUTPUT_SUFFIX}.{}",
            stem.to_string_lossy(),
            extension.to_string_lossy()
        ),
        None => format!("{}{OUTPUT_SUFFIX}", stem.to_string_lossy()),
    };

    input
        .parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}
