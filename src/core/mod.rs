//! Core domain types for Wordle
//!
//! Pure value types: words, tile feedback and the unknown-letter set.
//! Nothing in here performs I/O.

mod guess;
mod letters;
mod word;

pub use guess::{Code, Guess, GuessError};
pub use letters::UnknownLetters;
pub use word::{MAX_WORD_LENGTH, WORD_LENGTH, Word, WordError, letter_index};
