//! Corpus statistics command

use crate::core::Word;
use crate::stats::{
    FrequencyError, LetterTable, bigram_frequency, letter_frequency, letter_occurrence_frequency,
};

/// Letter and bigram frequencies of a word set
#[derive(Debug, Clone)]
pub struct CorpusStats {
    pub total_words: usize,
    pub in_word: LetterTable,
    pub occurrence: LetterTable,
    /// Most frequent bigrams, best first
    pub bigrams: Vec<([u8; 2], f64)>,
}

impl CorpusStats {
    /// Letters by descending in-word rate, ties alphabetical
    #[must_use]
    pub fn letters_by_rate(&self) -> Vec<(u8, f64)> {
        let mut letters: Vec<(u8, f64)> = self.in_word.iter().collect();
        letters.sort_by(|(l1, r1), (l2, r2)| r2.total_cmp(r1).then_with(|| l1.cmp(l2)));
        letters
    }
}

/// Compute corpus statistics, keeping the `top_bigrams` most frequent pairs
///
/// # Errors
/// Returns `FrequencyError::EmptyWordList` for an empty corpus.
pub fn corpus_stats(words: &[Word], top_bigrams: usize) -> Result<CorpusStats, FrequencyError> {
    let mut bigrams: Vec<([u8; 2], f64)> = bigram_frequency(words)?.into_iter().collect();
    bigrams.sort_by(|(p1, r1), (p2, r2)| r2.total_cmp(r1).then_with(|| p1.cmp(p2)));
    bigrams.truncate(top_bigrams);

    Ok(CorpusStats {
        total_words: words.len(),
        in_word: letter_frequency(words)?,
        occurrence: letter_occurrence_frequency(words)?,
        bigrams,
    })
}
