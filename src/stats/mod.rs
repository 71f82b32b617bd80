//! Word-set statistics
//!
//! Letter and bigram rates, plus the shared-letter subset rating.

pub mod frequency;
pub mod overlap;

pub use frequency::{
    BigramTable, FrequencyError, LetterTable, bigram_frequency, letter_frequency,
    letter_occurrence_frequency, word_likelihood,
};
pub use overlap::{rank_by_shared_letters, shared_letter_rating};
