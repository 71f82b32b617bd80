//! Corpus pruning by word shape and solve history

use super::history::SolvedHistory;
use crate::core::Word;
use log::debug;

/// Which words to drop from the corpus before a game
///
/// The three shape filters never drop a word that has already been an
/// answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusOptions {
    /// Drop every previously solved word
    pub exclude_previous_solutions: bool,
    /// Drop words ending in "s" but not "ss"
    pub exclude_plurals: bool,
    /// Drop words ending in "ed" but not "eed"
    pub exclude_past_tense: bool,
    /// Drop words starting with "un"
    pub exclude_un_prefixed: bool,
}

impl CorpusOptions {
    /// True if `word` survives these options
    #[must_use]
    pub fn keeps(&self, word: &Word, history: &SolvedHistory) -> bool {
        let solved = history.contains(word.text());
        if solved {
            return !self.exclude_previous_solutions;
        }

        let plural = word.ends_with("s") && !word.ends_with("ss");
        let past_tense = word.ends_with("ed") && !word.ends_with("eed");
        let un_prefixed = word.starts_with("un");

        !((self.exclude_plurals && plural)
            || (self.exclude_past_tense && past_tense)
            || (self.exclude_un_prefixed && un_prefixed))
    }

    /// Filter `words`, preserving order
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::wordlists::{CorpusOptions, SolvedHistory};
    /// use wordle_assist::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["crane", "boxes", "gloss", "tests"], 5);
    /// let options = CorpusOptions { exclude_plurals: true, ..CorpusOptions::default() };
    /// let kept = options.apply(words, &SolvedHistory::empty("unused.txt"));
    /// assert_eq!(kept.len(), 2);
    /// ```
    #[must_use]
    pub fn apply(&self, words: Vec<Word>, history: &SolvedHistory) -> Vec<Word> {
        let before = words.len();
        let kept: Vec<Word> = words
            .into_iter()
            .filter(|w| self.keeps(w, history))
            .collect();
        debug!("corpus filter kept {} of {before} words", kept.len());
        kept
    }
}
