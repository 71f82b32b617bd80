//! One-shot suggestion command
//!
//! Applies guesses given on the command line and reports what is left.

use crate::core::{Guess, Word};
use crate::solver::{Session, SessionError, Suggestion, SuggestorConfig, Turn};

/// Outcome of replaying a list of guesses
#[derive(Debug, Clone)]
pub struct SuggestReport {
    pub turns: Vec<Turn>,
    /// Remaining candidates with their likelihood rating
    pub candidates: Vec<(Word, f64)>,
    /// Ranked next guesses, best last; empty when no candidate remains
    pub suggestions: Vec<Suggestion>,
    pub winner: Option<Word>,
}

/// Parse a `WORD:CODES` argument such as `crane:gybbb`
///
/// # Errors
/// Returns a message for a missing separator or invalid guess.
///
/// # Examples
/// ```
/// use wordle_assist::commands::parse_guess_arg;
///
/// let guess = parse_guess_arg("crane:gybbb").unwrap();
/// assert_eq!(guess.letters().text(), "crane");
/// assert!(parse_guess_arg("crane").is_err());
/// ```
pub fn parse_guess_arg(arg: &str) -> Result<Guess, String> {
    let (letters, codes) = arg
        .split_once(':')
        .ok_or_else(|| format!("expected WORD:CODES, got {arg:?}"))?;
    Guess::parse(letters, codes).map_err(|e| e.to_string())
}

/// Apply `guesses` in order and rank what remains
///
/// # Errors
/// Fails if the vocabulary is unusable or a guess has the wrong length.
pub fn run_suggest(
    vocabulary: Vec<Word>,
    guesses: &[Guess],
    config: SuggestorConfig,
) -> Result<SuggestReport, SessionError> {
    let mut session = Session::new(vocabulary, config)?;
    for guess in guesses {
        session.apply(guess.clone())?;
    }

    let suggestions = if session.candidates().is_empty() {
        Vec::new()
    } else {
        session.suggest()?
    };

    Ok(SuggestReport {
        turns: session.history().to_vec(),
        candidates: session
            .candidate_ratings()
            .into_iter()
            .map(|(word, rating)| (word.clone(), rating))
            .collect(),
        suggestions,
        winner: session.winning_word().ok().cloned(),
    })
}
