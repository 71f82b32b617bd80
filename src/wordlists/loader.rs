//! Word list loading utilities
//!
//! Corpus files hold one word per line. Entries are lowercased; blank lines,
//! entries of the wrong length and entries with non-letters are skipped.

use crate::core::Word;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Load every word of `length` letters from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/five-letter-words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let lines: Vec<&str> = content.lines().collect();
    let words = words_from_slice(&lines, length);

    let skipped = lines.iter().filter(|l| !l.trim().is_empty()).count() - words.len();
    if skipped > 0 {
        warn!(
            "skipped {skipped} entries in {} that are not {length}-letter words",
            path.display()
        );
    }

    Ok(words)
}

/// Convert a string slice to a Word vector, keeping only `length`-letter words
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["Crane", "toolong", "slate"], 5);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "crane");
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .filter_map(|s| Word::with_length(s, length).ok())
        .collect()
}
