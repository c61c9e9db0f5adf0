//! Word list loading

use crate::dictionary::WordIndex;
use crate::io::configuration::{BLOCKED, EMPTY};
use crate::io::error::{FillError, Result, file_system};
use std::path::Path;
use tracing::{info, warn};

/// Words from newline-delimited text, sorted and deduplicated
///
/// Lines are trimmed and blank lines dropped. Lines containing a grid symbol
/// could never be told apart from a pattern, so they are skipped.
pub fn parse_words(text: &str) -> Vec<String> {
    let mut skipped = 0;
    let mut words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| {
            let usable = !line.contains([BLOCKED, EMPTY]);
            if !usable {
                skipped += 1;
            }
            usable
        })
        .map(str::to_owned)
        .collect();

    if skipped > 0 {
        warn!(skipped, "skipped dictionary lines containing grid symbols");
    }
    words.sort();
    words.dedup();
    words
}

/// Build a word index from a word list file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, or `EmptyDictionary` if
/// it holds no usable words
pub fn load_words(path: &Path) -> Result<WordIndex> {
    let text = std::fs::read_to_string(path).map_err(|err| file_system(path, "read", err))?;
    let words = parse_words(&text);
    if words.is_empty() {
        return Err(FillError::EmptyDictionary {
            path: path.to_path_buf(),
        });
    }

    let index = WordIndex::from_words(&words);
    info!(
        path = %path.display(),
        words = index.len(),
        lengths = index.length_count(),
        "dictionary loaded"
    );
    Ok(index)
}
