//! Record of previously solved answers
//!
//! The history file is a whitespace-separated list of words, one appended
//! per solved game.

use crate::core::Word;
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Previously solved answers, backed by a file
#[derive(Debug, Clone)]
pub struct SolvedHistory {
    path: PathBuf,
    words: Vec<String>,
    seen: FxHashSet<String>,
}

impl SolvedHistory {
    /// Read the history at `path`
    ///
    /// A missing file is an empty history.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file exists but cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e),
        };

        let mut history = Self {
            path,
            words: Vec::new(),
            seen: FxHashSet::default(),
        };
        for word in content.split_whitespace() {
            history.insert(word.to_lowercase());
        }
        Ok(history)
    }

    /// Empty history that will be written to `path`
    #[must_use]
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            words: Vec::new(),
            seen: FxHashSet::default(),
        }
    }

    fn insert(&mut self, word: String) -> bool {
        if self.seen.insert(word.clone()) {
            self.words.push(word);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    /// Solved words in file order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `word` to the history file
    ///
    /// Returns `Ok(false)` without touching the file if the word is already
    /// recorded.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or appended to.
    pub fn record(&mut self, word: &Word) -> io::Result<bool> {
        let word = word.text().to_string();
        if self.contains(&word) {
            warn!("{word} is already in {}", self.path.display());
            return Ok(false);
        }

        let needs_newline = match fs::read(&self.path) {
            Ok(bytes) => bytes.last().is_some_and(|&b| b != b'\n'),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(e),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if needs_newline {
            writeln!(file)?;
        }
        writeln!(file, "{word}")?;

        info!("recorded {word} in {}", self.path.display());
        self.insert(word);
        Ok(true)
    }
}
