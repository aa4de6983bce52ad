//! Word list loading utilities
//!
//! Loads word lists from plain text files or converts the embedded
//! constants into `Word` values.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// One word per line; blank lines and `#` comment lines are skipped, as
/// are entries that fail `Word` validation.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_arena::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/solutions.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_arena::wordlists::loader::words_from_slice;
/// use wordle_arena::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
