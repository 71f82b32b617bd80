//! Letter and bigram frequency tables over a word set
//!
//! Tables are plain derived values. Recompute them whenever the word set
//! changes; nothing here is updated incrementally.

use crate::core::{Word, letter_index};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Error type for frequency computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrequencyError {
    #[error("cannot compute letter rates over an empty word list")]
    EmptyWordList,
}

/// Per-letter rates indexed `a..=z`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterTable {
    rates: [f64; 26],
}

impl LetterTable {
    /// Rate for one lowercase letter (0.0 for anything else)
    #[inline]
    #[must_use]
    pub fn rate(&self, letter: u8) -> f64 {
        if letter.is_ascii_lowercase() {
            self.rates[letter_index(letter)]
        } else {
            0.0
        }
    }

    /// Copy of the table with every rate of exactly 1.0 set to 0
    ///
    /// A letter present in every word cannot split the set, so it carries no
    /// ranking value.
    #[must_use]
    #[allow(clippy::float_cmp)] // Exact match on a ratio of equal counts
    pub fn discriminating(mut self) -> Self {
        for rate in &mut self.rates {
            if *rate == 1.0 {
                *rate = 0.0;
            }
        }
        self
    }

    /// Copy of the table with every letter that `in_word` rates exactly 1.0 set to 0
    ///
    /// Applies the [`discriminating`](Self::discriminating) mask of an in-word
    /// table to another table over the same words, such as occurrence rates.
    #[must_use]
    #[allow(clippy::float_cmp)] // Exact match on a ratio of equal counts
    pub fn without_universal(mut self, in_word: &Self) -> Self {
        for (rate, &mask) in self.rates.iter_mut().zip(&in_word.rates) {
            if mask == 1.0 {
                *rate = 0.0;
            }
        }
        self
    }

    /// `(letter, rate)` pairs in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        (b'a'..=b'z').zip(self.rates.iter().copied())
    }
}

/// Adjacent letter pair rates
pub type BigramTable = FxHashMap<[u8; 2], f64>;

fn word_count(words: &[Word]) -> Result<f64, FrequencyError> {
    if words.is_empty() {
        return Err(FrequencyError::EmptyWordList);
    }
    Ok(words.len() as f64)
}

/// Fraction of words containing each letter at least once
///
/// Every rate lies in `[0, 1]`.
///
/// # Errors
/// Returns `FrequencyError::EmptyWordList` for an empty slice.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::stats::letter_frequency;
///
/// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
/// let table = letter_frequency(&words).unwrap();
/// assert_eq!(table.rate(b'c'), 0.5);
/// assert_eq!(table.rate(b'a'), 1.0);
/// assert_eq!(table.discriminating().rate(b'a'), 0.0);
/// ```
pub fn letter_frequency(words: &[Word]) -> Result<LetterTable, FrequencyError> {
    let total = word_count(words)?;

    let mut counts = [0usize; 26];
    for word in words {
        for letter in word.distinct_letters() {
            counts[letter_index(letter)] += 1;
        }
    }

    Ok(LetterTable {
        rates: counts.map(|c| c as f64 / total),
    })
}

/// Total occurrences of each letter divided by the number of words
///
/// Repeated letters count every time, so rates may exceed 1.
///
/// # Errors
/// Returns `FrequencyError::EmptyWordList` for an empty slice.
pub fn letter_occurrence_frequency(words: &[Word]) -> Result<LetterTable, FrequencyError> {
    let total = word_count(words)?;

    let mut counts = [0usize; 26];
    for word in words {
        for &letter in word.as_bytes() {
            counts[letter_index(letter)] += 1;
        }
    }

    Ok(LetterTable {
        rates: counts.map(|c| c as f64 / total),
    })
}

/// Occurrences of each adjacent letter pair divided by the number of words
///
/// # Errors
/// Returns `FrequencyError::EmptyWordList` for an empty slice.
pub fn bigram_frequency(words: &[Word]) -> Result<BigramTable, FrequencyError> {
    let total = word_count(words)?;

    let mut counts: FxHashMap<[u8; 2], usize> = FxHashMap::default();
    for word in words {
        for pair in word.as_bytes().windows(2) {
            *counts.entry([pair[0], pair[1]]).or_insert(0) += 1;
        }
    }

    Ok(counts
        .into_iter()
        .map(|(pair, count)| (pair, count as f64 / total))
        .collect())
}

/// Sum of per-letter rates over a word's letters
///
/// With an occurrence table this rates how "typical" a candidate looks.
#[must_use]
pub fn word_likelihood(word: &Word, table: &LetterTable) -> f64 {
    word.as_bytes().iter().map(|&l| table.rate(l)).sum()
}
