//! Word solving command
//!
//! Plays the assistant against a known answer and records the solution path.

use crate::core::{Guess, Word};
use crate::solver::{Session, SessionError, SuggestError, SuggestorConfig};
use log::debug;

/// Default guess limit, as in Wordle
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<SolveStep>,
    pub target: Word,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub guess: Guess,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// The word the assistant would play next
///
/// The unique candidate once the game is solved, otherwise the top
/// suggestion. When no word scores above zero the letters cannot split the
/// candidates any further, so the first candidate is played instead. `None`
/// when no candidate remains.
///
/// # Errors
/// Propagates suggestion errors other than running out of candidates.
pub fn next_guess(session: &mut Session) -> Result<Option<Word>, SessionError> {
    if let Ok(word) = session.winning_word() {
        return Ok(Some(word.clone()));
    }
    match session.suggest() {
        Ok(mut ranked) => match ranked.pop() {
            Some(best) if best.score > 0.0 => Ok(Some(best.word)),
            _ => Ok(session.candidates().first().cloned()),
        },
        Err(SessionError::Suggest(SuggestError::EmptyCandidates)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Solve `target` by always playing [`next_guess`]
///
/// The game is lost when `max_guesses` run out or the candidates empty out,
/// which happens when `target` is not in `vocabulary`.
///
/// # Errors
/// Fails if the vocabulary is unusable or `target` has the wrong length.
pub fn solve_word(
    vocabulary: Vec<Word>,
    target: &Word,
    config: SuggestorConfig,
    max_guesses: usize,
) -> Result<SolveResult, SessionError> {
    let mut session = Session::new(vocabulary, config)?;
    if target.len() != session.word_length() {
        return Err(SessionError::LengthMismatch {
            expected: session.word_length(),
            found: target.len(),
        });
    }

    let mut steps = Vec::new();
    let mut success = false;

    while steps.len() < max_guesses {
        let Some(word) = next_guess(&mut session)? else {
            debug!("no candidates left for {target}");
            break;
        };

        let guess = Guess::against(&word, target);
        let solved = guess.is_solved();
        let turn = session.apply(guess)?;
        steps.push(SolveStep {
            guess: turn.guess.clone(),
            candidates_before: turn.candidates_before,
            candidates_after: turn.candidates_after,
        });

        if solved {
            success = true;
            break;
        }
    }

    Ok(SolveResult {
        success,
        steps,
        target: target.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const POOL: &[&str] = &[
        "crane", "crate", "grate", "plate", "slate", "spate", "skate", "stale", "steal", "least",
        "caste", "react", "trace", "cater", "heart", "earth", "baker", "flake", "pious", "dummy",
    ];

    fn pool() -> Vec<Word> {
        words_from_slice(POOL, 5)
    }

    #[test]
    fn solves_every_word_in_pool() {
        for target in pool() {
            let result = solve_word(pool(), &target, SuggestorConfig::default(), POOL.len()).unwrap();
            assert!(result.success, "failed to solve {target}");
            assert_eq!(result.steps.last().unwrap().guess.letters(), &target);
        }
    }

    #[test]
    fn candidates_never_grow() {
        let target = Word::new("heart").unwrap();
        let result = solve_word(pool(), &target, SuggestorConfig::default(), 6).unwrap();
        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn respects_guess_limit() {
        let target = Word::new("dummy").unwrap();
        let result = solve_word(pool(), &target, SuggestorConfig::default(), 1).unwrap();
        assert!(result.steps.len() <= 1);
    }

    #[test]
    fn unknown_target_is_lost() {
        let target = Word::new("zesty").unwrap();
        let result = solve_word(pool(), &target, SuggestorConfig::default(), 6).unwrap();
        assert!(!result.success);
    }

    #[test]
    fn wrong_length_target_is_an_error() {
        let target = Word::with_length("puzzle", 6).unwrap();
        assert!(matches!(
            solve_word(pool(), &target, SuggestorConfig::default(), 6),
            Err(SessionError::LengthMismatch { expected: 5, found: 6 })
        ));
    }

    #[test]
    fn next_guess_prefers_unique_candidate() {
        let mut session = Session::new(pool(), SuggestorConfig::default()).unwrap();
        session.apply(Guess::parse("crane", "bbbbb").unwrap()).unwrap();
        session.apply(Guess::parse("dummy", "bybbb").unwrap()).unwrap();
        assert_eq!(next_guess(&mut session).unwrap().unwrap().text(), "pious");

        session.apply(Guess::parse("pious", "bbbbb").unwrap()).unwrap();
        assert!(next_guess(&mut session).unwrap().is_none());
    }

    #[test]
    fn next_guess_falls_back_on_anagrams() {
        let mut session = Session::new(pool(), SuggestorConfig::default()).unwrap();
        // Leaves slate and stale, which no letter statistic can separate
        session.apply(Guess::parse("trace", "ybgbg").unwrap()).unwrap();
        session.apply(Guess::parse("least", "yygyy").unwrap()).unwrap();
        let guess = next_guess(&mut session).unwrap().unwrap();
        assert!(session.candidates().contains(&guess));
    }
}
