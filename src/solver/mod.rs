//! Game state and next-guess suggestion
//!
//! [`Session`] holds the candidate set for one game; [`Suggestor`] ranks the
//! vocabulary against it.

mod session;
mod suggestor;

pub use session::{Session, SessionError, Turn};
pub use suggestor::{
    DEFAULT_TOP_N, LetterModel, SuggestError, Suggestion, Suggestor, SuggestorConfig, base_score,
    suggest, unknown_multiplier,
};
