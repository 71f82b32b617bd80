//! Rule derivation from a scored guess
//!
//! Each distinct letter is handled once. Its correct, present and absent
//! tiles are looked at together, because Wordle marks surplus copies of a
//! letter absent even when the letter is in the answer.

use super::rule::Rule;
use crate::core::{Code, Guess};
use log::debug;

/// Rules implied by one guess, plus the letters it revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    pub rules: Vec<Rule>,
    /// Distinct guessed letters, in order of first appearance
    pub letters_seen: Vec<u8>,
}

/// Translate one guess into the minimal set of rules its feedback implies
///
/// Per letter, in order of first appearance:
/// 1. Correct tiles give `OnlyAt` when the letter also has an absent tile,
///    otherwise `At`.
/// 2. Present tiles give `OnlyNOf` when the letter also has an absent tile,
///    and always give `Present`.
/// 3. Absent tiles give `NotIn` when the letter has no correct or present
///    tile, otherwise `NotAt`.
///
/// # Examples
/// ```
/// use wordle_assist::core::Guess;
/// use wordle_assist::rules::{Rule, score_guess};
///
/// let guess = Guess::parse("geese", "bgbbg").unwrap();
/// let scored = score_guess(&guess);
/// assert_eq!(
///     scored.rules,
///     vec![
///         Rule::not_in('g'),
///         Rule::only_at('e', [1, 4]),
///         Rule::not_at('e', [2]),
///         Rule::not_in('s'),
///     ]
/// );
/// ```
#[must_use]
pub fn score_guess(guess: &Guess) -> ScoredGuess {
    let mut rules = Vec::new();
    let letters_seen: Vec<u8> = guess.letters().distinct_letters().collect();

    for &letter in &letters_seen {
        let correct: Vec<usize> = guess.positions(letter, Code::Correct).collect();
        let present: Vec<usize> = guess.positions(letter, Code::Present).collect();
        let absent: Vec<usize> = guess.positions(letter, Code::Absent).collect();
        let ch = char::from(letter);

        if !correct.is_empty() {
            if absent.is_empty() {
                rules.push(Rule::at(ch, correct.iter().copied()));
            } else {
                rules.push(Rule::only_at(ch, correct.iter().copied()));
            }
        }

        if !present.is_empty() {
            if !absent.is_empty() {
                rules.push(Rule::only_n_of(ch, present.iter().copied()));
            }
            rules.push(Rule::present(ch, present.iter().copied()));
        }

        if !absent.is_empty() {
            if correct.is_empty() && present.is_empty() {
                rules.push(Rule::not_in(ch));
            } else {
                rules.push(Rule::not_at(ch, absent));
            }
        }
    }

    for rule in &rules {
        debug!("making rule: {rule}");
    }

    ScoredGuess {
        rules,
        letters_seen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleKind;

    fn rules_for(letters: &str, codes: &str) -> Vec<Rule> {
        score_guess(&Guess::parse(letters, codes).unwrap()).rules
    }

    #[test]
    fn single_absent_letter_is_not_in() {
        let rules = rules_for("crazy", "ggggb");
        assert!(rules.contains(&Rule::not_in('y')));
    }

    #[test]
    fn absent_with_correct_copy_is_not_at() {
        // e green at 0, e gray at 4
        let rules = rules_for("eerie", "gbbbb");
        assert!(rules.contains(&Rule::not_at('e', [1, 4])));
        assert!(!rules.contains(&Rule::not_in('e')));
    }

    #[test]
    fn correct_with_absent_copy_caps_count() {
        // s a s s y: correct, absent, present, absent, correct
        let rules = rules_for("sassy", "gbybg");
        assert_eq!(
            rules,
            vec![
                Rule::only_at('s', [0]),
                Rule::only_n_of('s', [2]),
                Rule::present('s', [2]),
                Rule::not_at('s', [3]),
                Rule::not_in('a'),
                Rule::at('y', [4]),
            ]
        );

        let caps = rules
            .iter()
            .filter(|r| r.letter() == b's')
            .filter(|r| matches!(r.kind(), RuleKind::OnlyAt | RuleKind::OnlyNOf))
            .count();
        assert_eq!(caps, 2);
    }

    #[test]
    fn present_stacks_with_only_n_of() {
        let rules = rules_for("sails", "ybbbb");
        let s_rules: Vec<&Rule> = rules.iter().filter(|r| r.letter() == b's').collect();
        assert_eq!(
            s_rules,
            vec![
                &Rule::only_n_of('s', [0]),
                &Rule::present('s', [0]),
                &Rule::not_at('s', [4]),
            ]
        );
    }

    #[test]
    fn correct_only_gives_at() {
        let rules = rules_for("crane", "ggbbb");
        assert_eq!(
            rules,
            vec![
                Rule::at('c', [0]),
                Rule::at('r', [1]),
                Rule::not_in('a'),
                Rule::not_in('n'),
                Rule::not_in('e'),
            ]
        );
    }

    #[test]
    fn each_letter_processed_once() {
        let scored = score_guess(&Guess::parse("mamma", "gbbgb").unwrap());
        assert_eq!(scored.letters_seen, b"ma".to_vec());
        let m_rules = scored.rules.iter().filter(|r| r.letter() == b'm').count();
        assert_eq!(m_rules, 2);
        assert!(scored.rules.contains(&Rule::only_at('m', [0, 3])));
        assert!(scored.rules.contains(&Rule::not_at('m', [2])));
    }

    #[test]
    fn derived_rules_accept_the_secret() {
        let secret = crate::core::Word::new("abbey").unwrap();
        for guess in ["babes", "keeps", "abyss", "ebbed", "abbey"] {
            let guess = Guess::against(&crate::core::Word::new(guess).unwrap(), &secret);
            for rule in score_guess(&guess).rules {
                assert!(rule.evaluate(&secret), "{rule} rejects the secret for {guess}");
            }
        }
    }
}
