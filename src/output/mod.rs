//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    colored_guess, write_benchmark_result, write_candidates, write_corpus_stats,
    write_solve_result, write_suggest_report, write_suggestions, write_turn,
};
pub use formatters::star_ratings;
