//! Wordle word representation
//!
//! A Word stores a fixed-length lowercase word along with per-letter counts,
//! so membership and multiplicity checks never rescan the text.

use std::fmt;
use thiserror::Error;

/// Canonical Wordle word length
pub const WORD_LENGTH: usize = 5;

/// Longest word length accepted by [`Word::with_length`]
pub const MAX_WORD_LENGTH: usize = 16;

/// A lowercase ASCII word with letter count tracking
///
/// Equality, hashing and ordering are all by the word text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    counts: [u8; 26],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// Index of a lowercase ASCII letter in the alphabet (`b'a'` -> 0)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl Word {
    /// Create a new 5-letter Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, WORD_LENGTH)
    }

    /// Create a Word of an arbitrary fixed length
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` if the text is not `length` letters
    /// long or `length` is outside `1..=MAX_WORD_LENGTH`, and the character
    /// errors of [`Word::new`] otherwise.
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != length || !(1..=MAX_WORD_LENGTH).contains(&length) {
            return Err(WordError::InvalidLength {
                expected: length,
                found: text.len(),
            });
        }

        if !text.bytes().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut counts = [0u8; 26];
        for ch in text.bytes() {
            counts[letter_index(ch)] += 1;
        }

        Ok(Self { text, counts })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; words hold at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.as_bytes()[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// How many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        if letter.is_ascii_lowercase() {
            usize::from(self.counts[letter_index(letter)])
        } else {
            0
        }
    }

    /// Positions where `letter` appears, in ascending order
    pub fn positions_of(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        self.as_bytes()
            .iter()
            .enumerate()
            .filter(move |&(_, &ch)| ch == letter)
            .map(|(i, _)| i)
    }

    /// Distinct letters in order of first appearance
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.as_bytes()
            .iter()
            .enumerate()
            .filter(|&(i, ch)| !self.as_bytes()[..i].contains(ch))
            .map(|(_, &ch)| ch)
    }

    /// Starts with `prefix`
    #[inline]
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.text.starts_with(prefix)
    }

    /// Ends with `suffix`
    #[inline]
    #[must_use]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.text.ends_with(suffix)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::with_length(s, s.len())
    }
}
