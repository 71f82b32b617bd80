//! Letter rules: derivation from feedback and candidate filtering

mod derive;
mod filter;
mod rule;

pub use derive::{ScoredGuess, score_guess};
pub use filter::apply_rules;
pub use rule::{Rule, RuleKind};
