//! Corpus loading, pruning and solve history

mod filter;
mod history;
pub mod loader;

pub use filter::CorpusOptions;
pub use history::SolvedHistory;
