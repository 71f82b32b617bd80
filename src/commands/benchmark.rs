//! Benchmark command
//!
//! Simulates the assistant over a sample of answers in parallel.

use super::solve::solve_word;
use crate::core::Word;
use crate::solver::{SessionError, SuggestorConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<Word>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved games
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct answers from `words`
///
/// A fixed `seed` makes the sample reproducible.
#[must_use]
pub fn sample_targets(words: &[Word], count: usize, seed: Option<u64>) -> Vec<Word> {
    let mut rng = seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    words.choose_multiple(&mut rng, count).cloned().collect()
}

/// Solve every target against `vocabulary`
///
/// Each game runs in its own session on the rayon pool. Lost games count
/// toward `failed` and are left out of the guess statistics.
///
/// # Errors
/// Fails if the vocabulary is unusable or a target has the wrong length.
pub fn run_benchmark(
    vocabulary: &[Word],
    targets: &[Word],
    config: SuggestorConfig,
    max_guesses: usize,
) -> Result<BenchmarkResult, SessionError> {
    let start = Instant::now();

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let results = targets
        .par_iter()
        .map(|target| {
            let result = solve_word(vocabulary.to_vec(), target, config, max_guesses);
            pb.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>();
    pb.finish_and_clear();
    let results = results?;

    let mut solved = 0;
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_seen = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for result in results {
        if result.success {
            let guesses = result.steps.len();
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_seen = max_seen.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failed.push(result.target);
        }
    }

    let duration = start.elapsed();
    let total_words = targets.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_seen,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    const POOL: &[&str] = &[
        "crane", "crate", "grate", "plate", "slate", "spate", "skate", "baker", "flake", "pious",
        "dummy", "heart", "fight", "vouch", "nymph",
    ];

    fn pool() -> Vec<Word> {
        words_from_slice(POOL, 5)
    }

    #[test]
    fn benchmark_runs() {
        let words = pool();
        let result = run_benchmark(&words, &words[..8], SuggestorConfig::default(), 6).unwrap();

        assert_eq!(result.total_words, 8);
        assert_eq!(result.solved + result.failed.len(), 8);
        assert!(result.max_guesses <= 6);
        if result.solved > 0 {
            assert!(result.min_guesses >= 1);
            assert!(result.average_guesses >= result.min_guesses as f64);
            assert!(result.average_guesses <= result.max_guesses as f64);
        }
    }

    #[test]
    fn distribution_sums_to_solved() {
        let words = pool();
        let result = run_benchmark(&words, &words, SuggestorConfig::default(), 6).unwrap();
        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.solved);
        for &guesses in result.distribution.keys() {
            assert!((1..=6).contains(&guesses));
        }
    }

    #[test]
    fn unknown_targets_fail() {
        let words = pool();
        let targets = words_from_slice(&["zesty", "quilt"], 5);
        let result = run_benchmark(&words, &targets, SuggestorConfig::default(), 6).unwrap();
        assert_eq!(result.solved, 0);
        assert_eq!(result.failed, targets);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn empty_sample() {
        let words = pool();
        let result = run_benchmark(&words, &[], SuggestorConfig::default(), 6).unwrap();
        assert_eq!(result.total_words, 0);
        assert!(result.distribution.is_empty());
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        let words = pool();
        let a = sample_targets(&words, 5, Some(7));
        let b = sample_targets(&words, 5, Some(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        assert_eq!(sample_targets(&words, 100, None).len(), words.len());
    }
}
