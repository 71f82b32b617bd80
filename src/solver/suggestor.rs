//! Next-guess suggestion by letter-frequency scoring
//!
//! Each guessable word is scored against the current candidate set:
//!
//! ```text
//! base(w)       = Σ rate(w[i]) / 1.5^count(w, w[i])
//! multiplier(w) = 1.1^(1 + |distinct letters of w still unknown|)
//! score(w)      = base(w) × multiplier(w)
//! ```
//!
//! Words outside the candidate set are still eligible, since a
//! non-candidate guess can split the candidates better than any candidate.

use crate::core::{UnknownLetters, Word};
use crate::stats::{
    FrequencyError, LetterTable, letter_frequency, letter_occurrence_frequency,
    rank_by_shared_letters,
};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Default number of suggestions returned
pub const DEFAULT_TOP_N: usize = 20;

const REPEAT_DAMPING: f64 = 1.5;
const UNKNOWN_BONUS: f64 = 1.1;

/// Error type for suggestion requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("no guessable words to suggest from")]
    EmptyVocabulary,
    #[error("no candidate words remain")]
    EmptyCandidates,
}

impl From<FrequencyError> for SuggestError {
    fn from(_: FrequencyError) -> Self {
        Self::EmptyCandidates
    }
}

/// Which statistic drives the ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LetterModel {
    /// Fraction of candidates containing each letter (letters in every candidate score 0)
    #[default]
    InWord,
    /// Raw letter occurrences per candidate
    Occurrence,
    /// Shared-letter subset matches against the candidates
    SharedLetters,
}

/// Suggestion settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestorConfig {
    pub top_n: usize,
    pub model: LetterModel,
}

impl Default for SuggestorConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            model: LetterModel::default(),
        }
    }
}

/// A ranked guess
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    pub score: f64,
}

/// Base scores computed from one specific letter table
///
/// Only valid for the table it was built from.
struct BaseScores {
    table: LetterTable,
    scores: FxHashMap<Word, f64>,
}

/// Ranks guesses, memoizing base scores per letter table
pub struct Suggestor {
    config: SuggestorConfig,
    cache: Option<BaseScores>,
}

/// Frequency-weighted letter sum with geometric damping of repeats
#[must_use]
pub fn base_score(word: &Word, table: &LetterTable) -> f64 {
    word.as_bytes()
        .iter()
        .map(|&letter| {
            let weight = 1.0 / REPEAT_DAMPING.powi(word.count_of(letter) as i32);
            table.rate(letter) * weight
        })
        .sum()
}

/// Bonus for probing letters that have not been guessed yet
#[must_use]
pub fn unknown_multiplier(word: &Word, unknown: UnknownLetters) -> f64 {
    let fresh = word.distinct_letters().filter(|&l| unknown.contains(l)).count();
    UNKNOWN_BONUS.powi(1 + fresh as i32)
}

/// One-shot suggestion without a persistent cache
///
/// # Errors
/// Fails if `vocabulary` or `candidates` is empty.
pub fn suggest(
    vocabulary: &[Word],
    candidates: &[Word],
    unknown: UnknownLetters,
    config: SuggestorConfig,
) -> Result<Vec<Suggestion>, SuggestError> {
    Suggestor::new(config).suggest(vocabulary, candidates, unknown)
}

impl Suggestor {
    #[must_use]
    pub const fn new(config: SuggestorConfig) -> Self {
        Self {
            config,
            cache: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> SuggestorConfig {
        self.config
    }

    /// Rank `vocabulary` against `candidates`
    ///
    /// Sorted ascending by `(score, word)`; the best of the `top_n` returned
    /// words is last. Identical inputs always give identical output.
    ///
    /// # Errors
    /// Fails if `vocabulary` or `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{UnknownLetters, Word};
    /// use wordle_assist::solver::{Suggestor, SuggestorConfig};
    ///
    /// let words: Vec<Word> = ["crane", "crate", "slate", "aaaaa"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    ///
    /// let mut suggestor = Suggestor::new(SuggestorConfig::default());
    /// let ranked = suggestor.suggest(&words, &words, UnknownLetters::all()).unwrap();
    /// assert_eq!(ranked.len(), 4);
    /// assert_eq!(ranked[0].word.text(), "aaaaa");
    /// ```
    pub fn suggest(
        &mut self,
        vocabulary: &[Word],
        candidates: &[Word],
        unknown: UnknownLetters,
    ) -> Result<Vec<Suggestion>, SuggestError> {
        if vocabulary.is_empty() {
            return Err(SuggestError::EmptyVocabulary);
        }
        if candidates.is_empty() {
            return Err(SuggestError::EmptyCandidates);
        }

        if self.config.model == LetterModel::SharedLetters {
            let ranked = rank_by_shared_letters(vocabulary, candidates, self.config.top_n)?;
            return Ok(ranked
                .into_iter()
                .map(|(word, rating)| Suggestion {
                    word,
                    score: rating as f64,
                })
                .collect());
        }

        let table = match self.config.model {
            LetterModel::Occurrence => letter_occurrence_frequency(candidates)?
                .without_universal(&letter_frequency(candidates)?),
            _ => letter_frequency(candidates)?.discriminating(),
        };

        let scores = self.base_scores(table, vocabulary);
        let mut ranked: Vec<Suggestion> = vocabulary
            .iter()
            .map(|word| Suggestion {
                word: word.clone(),
                score: scores[word] * unknown_multiplier(word, unknown),
            })
            .collect();

        ranked.sort_by(|a, b| a.score.total_cmp(&b.score).then_with(|| a.word.cmp(&b.word)));
        let skip = ranked.len().saturating_sub(self.config.top_n);
        Ok(ranked.split_off(skip))
    }

    /// Base scores for every vocabulary word under `table`
    ///
    /// The memo is dropped whenever the table differs from the one it was
    /// built for, so a score never outlives its table.
    fn base_scores(&mut self, table: LetterTable, vocabulary: &[Word]) -> &FxHashMap<Word, f64> {
        if self.cache.as_ref().is_none_or(|cache| cache.table != table) {
            debug!("letter table changed, rebuilding base scores");
            self.cache = None;
        }

        let cache = self.cache.get_or_insert_with(|| BaseScores {
            table,
            scores: FxHashMap::default(),
        });

        let missing: Vec<(Word, f64)> = vocabulary
            .par_iter()
            .filter(|word| !cache.scores.contains_key(*word))
            .map(|word| (word.clone(), base_score(word, &cache.table)))
            .collect();
        cache.scores.extend(missing);

        &cache.scores
    }
}
