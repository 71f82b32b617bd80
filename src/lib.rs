//! Wordle Assistant
//!
//! Turns Wordle tile feedback into letter rules, filters a word list down to
//! the words still possible, and ranks next guesses by letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Guess, Word};
//! use wordle_assist::solver::{Session, SuggestorConfig};
//!
//! let words: Vec<Word> = ["crane", "crate", "grate", "plate"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let mut session = Session::new(words, SuggestorConfig::default()).unwrap();
//!
//! session.apply(Guess::parse("plate", "bbggg").unwrap()).unwrap();
//! assert_eq!(session.candidates().len(), 2);
//!
//! let best = session.suggest().unwrap().pop().unwrap();
//! println!("next guess: {}", best.word);
//! ```

// Core domain types
pub mod core;

// Letter rules and candidate filtering
pub mod rules;

// Word-set statistics
pub mod stats;

// Game state and suggestions
pub mod solver;

// Word lists
pub mod wordlists;

// Command-line configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
