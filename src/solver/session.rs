//! One solving session: vocabulary, shrinking candidate set, guess history

use super::suggestor::{SuggestError, Suggestion, Suggestor, SuggestorConfig};
use crate::core::{Guess, UnknownLetters, Word};
use crate::rules::{Rule, apply_rules, score_guess};
use crate::stats::{letter_occurrence_frequency, word_likelihood};
use log::{debug, info};
use thiserror::Error;

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no unique solution yet ({remaining} candidates remain)")]
    NoUniqueSolution { remaining: usize },
    #[error("guess has {found} letters but words are {expected} letters long")]
    LengthMismatch { expected: usize, found: usize },
    #[error("vocabulary is empty")]
    EmptyVocabulary,
    #[error("vocabulary mixes word lengths")]
    MixedLengths,
    #[error("no guess to undo")]
    NothingToUndo,
    #[error(transparent)]
    Suggest(#[from] SuggestError),
}

/// One applied guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Guess,
    pub rules: Vec<Rule>,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solving state for one game
///
/// The vocabulary never changes; the candidate set is replaced by a filtered
/// copy after each guess.
pub struct Session {
    vocabulary: Vec<Word>,
    candidates: Vec<Word>,
    unknown: UnknownLetters,
    history: Vec<Turn>,
    suggestor: Suggestor,
    word_length: usize,
}

impl Session {
    /// Start a game over `vocabulary`
    ///
    /// # Errors
    /// Fails if the vocabulary is empty or mixes word lengths.
    pub fn new(vocabulary: Vec<Word>, config: SuggestorConfig) -> Result<Self, SessionError> {
        let word_length = vocabulary
            .first()
            .map(Word::len)
            .ok_or(SessionError::EmptyVocabulary)?;
        if vocabulary.iter().any(|w| w.len() != word_length) {
            return Err(SessionError::MixedLengths);
        }

        Ok(Self {
            candidates: vocabulary.clone(),
            vocabulary,
            unknown: UnknownLetters::all(),
            history: Vec::new(),
            suggestor: Suggestor::new(config),
            word_length,
        })
    }

    /// Apply one scored guess, narrowing the candidates
    ///
    /// # Errors
    /// Returns `SessionError::LengthMismatch` if the guess length differs from
    /// the vocabulary's word length.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Guess, Word};
    /// use wordle_assist::solver::{Session, SuggestorConfig};
    ///
    /// let words: Vec<Word> = ["crane", "crate", "slate"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut session = Session::new(words, SuggestorConfig::default()).unwrap();
    ///
    /// session.apply(Guess::parse("crane", "gggbg").unwrap()).unwrap();
    /// assert_eq!(session.winning_word().unwrap().text(), "crate");
    /// ```
    pub fn apply(&mut self, guess: Guess) -> Result<&Turn, SessionError> {
        if guess.len() != self.word_length {
            return Err(SessionError::LengthMismatch {
                expected: self.word_length,
                found: guess.len(),
            });
        }

        let scored = score_guess(&guess);
        let candidates_before = self.candidates.len();
        self.candidates = apply_rules(&self.candidates, &scored.rules);
        self.unknown.mark_seen(scored.letters_seen);

        debug!(
            "{guess}: {candidates_before} -> {} candidates",
            self.candidates.len()
        );
        if self.is_solved() {
            info!("unique solution found: {}", self.candidates[0]);
        }

        self.history.push(Turn {
            guess,
            rules: scored.rules,
            candidates_before,
            candidates_after: self.candidates.len(),
        });
        Ok(&self.history[self.history.len() - 1])
    }

    /// Drop the last guess and rebuild state from the remaining history
    ///
    /// # Errors
    /// Returns `SessionError::NothingToUndo` before the first guess.
    pub fn undo(&mut self) -> Result<Guess, SessionError> {
        let undone = self.history.pop().ok_or(SessionError::NothingToUndo)?;

        self.candidates = self.vocabulary.clone();
        self.unknown = UnknownLetters::all();
        for turn in &self.history {
            self.candidates = apply_rules(&self.candidates, &turn.rules);
            self.unknown.mark_seen(turn.guess.letters().distinct_letters());
        }
        debug!("undid {}, {} candidates", undone.guess, self.candidates.len());
        Ok(undone.guess)
    }

    /// Start a new game over the same vocabulary
    pub fn reset(&mut self) {
        info!("new game over {} words", self.vocabulary.len());
        self.candidates = self.vocabulary.clone();
        self.unknown = UnknownLetters::all();
        self.history.clear();
    }

    /// True once exactly one candidate remains
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.candidates.len() == 1
    }

    /// The unique remaining candidate
    ///
    /// # Errors
    /// Returns `SessionError::NoUniqueSolution` unless exactly one candidate remains.
    pub fn winning_word(&self) -> Result<&Word, SessionError> {
        match self.candidates.as_slice() {
            [word] => Ok(word),
            other => Err(SessionError::NoUniqueSolution {
                remaining: other.len(),
            }),
        }
    }

    /// Ranked next guesses, best last
    ///
    /// # Errors
    /// Fails with `SuggestError::EmptyCandidates` once no candidate remains.
    pub fn suggest(&mut self) -> Result<Vec<Suggestion>, SessionError> {
        Ok(self
            .suggestor
            .suggest(&self.vocabulary, &self.candidates, self.unknown)?)
    }

    /// Likelihood rating for every remaining candidate, in candidate order
    ///
    /// Empty when no candidate remains.
    #[must_use]
    pub fn candidate_ratings(&self) -> Vec<(&Word, f64)> {
        let Ok(table) = letter_occurrence_frequency(&self.candidates) else {
            return Vec::new();
        };
        self.candidates
            .iter()
            .map(|word| (word, word_likelihood(word, &table)))
            .collect()
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn vocabulary(&self) -> &[Word] {
        &self.vocabulary
    }

    #[must_use]
    pub const fn unknown(&self) -> UnknownLetters {
        self.unknown
    }

    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }
}
