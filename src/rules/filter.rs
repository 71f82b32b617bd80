//! Candidate filtering by rule list

use super::rule::Rule;
use crate::core::Word;
use log::debug;

/// Keep only the candidates that satisfy every rule
///
/// Rules are applied in the order given, each one narrowing the survivors of
/// the previous one. The input slice is left untouched. An empty result is a
/// valid outcome.
///
/// Every position a rule references must lie inside every candidate;
/// sessions reject guesses whose length differs from the corpus length.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::rules::{Rule, apply_rules};
///
/// let words: Vec<Word> = ["crane", "crate", "slate"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let rules = vec![Rule::at('c', [0]), Rule::not_in('n')];
///
/// let left = apply_rules(&words, &rules);
/// assert_eq!(left, vec![Word::new("crate").unwrap()]);
/// ```
#[must_use]
pub fn apply_rules(candidates: &[Word], rules: &[Rule]) -> Vec<Word> {
    debug_assert!(
        rules.iter().filter_map(Rule::max_position).all(|max| {
            candidates.iter().all(|w| max < w.len())
        }),
        "rule positions exceed candidate length"
    );

    let mut survivors: Vec<Word> = candidates.to_vec();
    for rule in rules {
        let before = survivors.len();
        survivors.retain(|word| rule.evaluate(word));
        debug!("rule '{rule}' kept {} of {before} words", survivors.len());
    }
    survivors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guess;
    use crate::rules::score_guess;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    const POOL: &[&str] = &[
        "crane", "crate", "grate", "plate", "slate", "sassy", "speed", "eerie",
        "abbey", "stork", "about", "geese", "lolly", "world", "floor", "robot",
    ];

    #[test]
    fn empty_rules_keep_everything() {
        let pool = words(POOL);
        assert_eq!(apply_rules(&pool, &[]), pool);
    }

    #[test]
    fn no_survivors_is_not_an_error() {
        let pool = words(&["crane", "crate", "grate", "plate"]);
        let guess = Guess::parse("crane", "ggbbb").unwrap();
        let left = apply_rules(&pool, &score_guess(&guess).rules);
        assert!(left.is_empty());
    }

    #[test]
    fn keeps_pool_order() {
        let pool = words(POOL);
        let left = apply_rules(&pool, &[Rule::is_in('a')]);
        assert_eq!(
            left,
            words(&["crane", "crate", "grate", "plate", "slate", "sassy", "abbey", "about"])
        );
    }

    fn guess_strategy() -> impl Strategy<Value = Guess> {
        (
            proptest::sample::select(POOL),
            proptest::collection::vec(0usize..3, 5),
        )
            .prop_map(|(letters, codes)| {
                let codes: String = codes.iter().map(|&c| ['g', 'y', 'b'][c]).collect();
                Guess::parse(letters, &codes).unwrap()
            })
    }

    proptest! {
        #[test]
        fn filtering_is_idempotent(guess in guess_strategy()) {
            let pool = words(POOL);
            let rules = score_guess(&guess).rules;
            let once = apply_rules(&pool, &rules);
            let twice = apply_rules(&once, &rules);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn rule_order_does_not_matter(guess in guess_strategy(), seed in any::<u64>()) {
            let pool = words(POOL);
            let rules = score_guess(&guess).rules;
            let mut shuffled = rules.clone();
            // Deterministic permutation driven by the seed
            let len = shuffled.len();
            for i in 0..len {
                let j = (seed as usize).wrapping_add(i * 7) % len;
                shuffled.swap(i, j);
            }
            prop_assert_eq!(apply_rules(&pool, &rules), apply_rules(&pool, &shuffled));
        }

        #[test]
        fn filtering_never_grows(guess in guess_strategy()) {
            let pool = words(POOL);
            let left = apply_rules(&pool, &score_guess(&guess).rules);
            prop_assert!(left.len() <= pool.len());
            prop_assert!(left.iter().all(|w| pool.contains(w)));
        }
    }
}
