//! Command implementations

pub mod benchmark;
pub mod play;
pub mod solve;
pub mod stats;
pub mod suggest;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use play::{PlayOptions, run_play};
pub use solve::{DEFAULT_MAX_GUESSES, SolveResult, SolveStep, next_guess, solve_word};
pub use stats::{CorpusStats, corpus_stats};
pub use suggest::{SuggestReport, parse_guess_arg, run_suggest};
