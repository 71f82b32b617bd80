//! Wordle Assistant - CLI
//!
//! Interactive assistant plus one-shot suggestion, simulation and corpus
//! statistics commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use wordle_assist::{
    commands::{
        DEFAULT_MAX_GUESSES, PlayOptions, corpus_stats, parse_guess_arg, run_benchmark, run_play,
        run_suggest, sample_targets, solve_word,
    },
    config::Config,
    core::{Guess, Word},
    output::{write_benchmark_result, write_corpus_stats, write_solve_result, write_suggest_report},
    solver::Session,
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant: turns tile feedback into letter rules and ranks next guesses",
    version,
    author
)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Play {
        /// Do not offer to record answers
        #[arg(long)]
        practice: bool,

        /// Guesses allowed per game
        #[arg(long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,

        /// Print the rules derived from each guess
        #[arg(long)]
        show_rules: bool,
    },

    /// Suggest the next guess from guesses made so far
    Suggest {
        /// A guess and its colors, e.g. crane:gybbb (repeatable, in order)
        #[arg(short, long = "guess", value_parser = parse_guess_arg)]
        guesses: Vec<Guess>,

        /// Print the rules derived from each guess
        #[arg(long)]
        show_rules: bool,
    },

    /// Simulate the assistant solving a known word
    Solve {
        /// The target word to solve
        word: String,

        #[arg(long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },

    /// Simulate the assistant on a random sample of the corpus
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = DEFAULT_MAX_GUESSES)]
        max_guesses: usize,
    },

    /// Letter and bigram frequencies of the corpus
    Stats {
        /// Number of bigrams to list
        #[arg(long, default_value = "15")]
        bigrams: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config;

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();

    let mut history = config.load_history()?;
    let words = config.load_corpus(&history)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        practice: false,
        max_guesses: DEFAULT_MAX_GUESSES,
        show_rules: false,
    });

    let mut out = io::stdout().lock();
    match command {
        Commands::Play {
            practice,
            max_guesses,
            show_rules,
        } => {
            let mut session = Session::new(words, config.suggestor_config())?;
            let options = PlayOptions {
                practice,
                max_guesses,
                show_rules,
            };
            run_play(&mut session, &mut history, options, io::stdin().lock(), out)
        }
        Commands::Suggest {
            guesses,
            show_rules,
        } => {
            let report = run_suggest(words, &guesses, config.suggestor_config())?;
            write_suggest_report(&mut out, &report, config.top_n, show_rules)?;
            Ok(())
        }
        Commands::Solve { word, max_guesses } => {
            let target = Word::with_length(word.as_str(), config.length)
                .with_context(|| format!("invalid target word {word:?}"))?;
            let result = solve_word(words, &target, config.suggestor_config(), max_guesses)?;
            write_solve_result(&mut out, &result)?;
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            max_guesses,
        } => {
            let targets = sample_targets(&words, count, seed);
            writeln!(out, "Running benchmark on {} random words...", targets.len())?;
            let result = run_benchmark(&words, &targets, config.suggestor_config(), max_guesses)?;
            write_benchmark_result(&mut out, &result, max_guesses)?;
            Ok(())
        }
        Commands::Stats { bigrams } => {
            let stats = corpus_stats(&words, bigrams)?;
            write_corpus_stats(&mut out, &stats)?;
            Ok(())
        }
    }
}
