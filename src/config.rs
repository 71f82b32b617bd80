//! Command-line configuration shared by every subcommand
//!
//! Flags are gathered once into [`Config`] and turned into the explicit
//! option values the library takes.

use crate::core::{MAX_WORD_LENGTH, WORD_LENGTH, Word};
use crate::solver::{DEFAULT_TOP_N, LetterModel, SuggestorConfig};
use crate::wordlists::loader::load_from_file;
use crate::wordlists::{CorpusOptions, SolvedHistory};
use anyhow::{Context, Result, bail};
use clap::Args;
use clap::builder::RangedU64ValueParser;
use log::{LevelFilter, info};
use std::path::PathBuf;

/// Global options
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Word list, one word per line
    #[arg(long, global = true, default_value = "data/five-letter-words.txt")]
    pub words: PathBuf,

    /// Previously solved answers
    #[arg(long, global = true, default_value = "data/solved-words.txt")]
    pub solved: PathBuf,

    /// Word length to play with
    #[arg(
        long,
        global = true,
        default_value_t = WORD_LENGTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_WORD_LENGTH as u64)
    )]
    pub length: usize,

    /// Number of suggestions to show
    #[arg(short = 't', long = "top", global = true, default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Letter statistic used to rank suggestions
    #[arg(short, long, global = true, value_enum, default_value_t = LetterModel::InWord)]
    pub model: LetterModel,

    /// Never suggest a previously solved answer
    #[arg(long, global = true)]
    pub exclude_previous: bool,

    /// Drop words ending in "s" (but not "ss")
    #[arg(long, global = true)]
    pub exclude_plurals: bool,

    /// Drop words ending in "ed" (but not "eed")
    #[arg(long, global = true)]
    pub exclude_past_tense: bool,

    /// Drop words starting with "un"
    #[arg(long, global = true)]
    pub exclude_un: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    #[must_use]
    pub const fn corpus_options(&self) -> CorpusOptions {
        CorpusOptions {
            exclude_previous_solutions: self.exclude_previous,
            exclude_plurals: self.exclude_plurals,
            exclude_past_tense: self.exclude_past_tense,
            exclude_un_prefixed: self.exclude_un,
        }
    }

    #[must_use]
    pub const fn suggestor_config(&self) -> SuggestorConfig {
        SuggestorConfig {
            top_n: self.top_n,
            model: self.model,
        }
    }

    /// Log level implied by the `-v` count
    #[must_use]
    pub const fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Read the solve history
    ///
    /// # Errors
    /// Fails if the history file exists but cannot be read.
    pub fn load_history(&self) -> Result<SolvedHistory> {
        SolvedHistory::load(&self.solved)
            .with_context(|| format!("reading solve history {}", self.solved.display()))
    }

    /// Load the word list and prune it with the corpus options
    ///
    /// # Errors
    /// Fails if the word list cannot be read or nothing survives filtering.
    pub fn load_corpus(&self, history: &SolvedHistory) -> Result<Vec<Word>> {
        let words = load_from_file(&self.words, self.length)
            .with_context(|| format!("reading word list {}", self.words.display()))?;
        let words = self.corpus_options().apply(words, history);
        if words.is_empty() {
            bail!(
                "no usable {}-letter words in {}",
                self.length,
                self.words.display()
            );
        }
        info!("loaded {} words from {}", words.len(), self.words.display());
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        config: Config,
    }

    fn parse(args: &[&str]) -> Config {
        Harness::parse_from(std::iter::once("test").chain(args.iter().copied())).config
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.length, 5);
        assert_eq!(config.suggestor_config(), SuggestorConfig::default());
        assert_eq!(config.corpus_options(), CorpusOptions::default());
        assert_eq!(config.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn flags_map_to_options() {
        let config = parse(&[
            "--top",
            "5",
            "--model",
            "shared-letters",
            "--exclude-plurals",
            "--exclude-un",
            "-vv",
        ]);
        assert_eq!(config.suggestor_config().top_n, 5);
        assert_eq!(config.suggestor_config().model, LetterModel::SharedLetters);
        let options = config.corpus_options();
        assert!(options.exclude_plurals && options.exclude_un_prefixed);
        assert!(!options.exclude_past_tense && !options.exclude_previous_solutions);
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn rejects_out_of_range_length() {
        let result = Harness::try_parse_from(["test", "--length", "0"]);
        assert!(result.is_err());
        let result = Harness::try_parse_from(["test", "--length", "17"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_word_list_is_an_error() {
        let config = parse(&["--words", "/nonexistent/words.txt"]);
        let history = SolvedHistory::empty("/nonexistent/solved.txt");
        let err = config.load_corpus(&history).unwrap_err();
        assert!(err.to_string().contains("reading word list"));
    }
}
