//! Interactive assistant loop
//!
//! The user plays Wordle elsewhere and types in each guess with its tile
//! colors; the assistant narrows the candidates and suggests the next guess.

use crate::core::{Guess, Word};
use crate::output::{write_candidates, write_suggestions, write_turn};
use crate::solver::{Session, SessionError};
use crate::wordlists::SolvedHistory;
use anyhow::{Context, Result};
use colored::Colorize;
use log::{info, warn};
use std::io::{BufRead, Write};

/// How many candidates to list under each turn
const CANDIDATE_LIMIT: usize = 15;

/// Interactive game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOptions {
    /// Never offer to record the answer
    pub practice: bool,
    pub max_guesses: usize,
    /// Print the rules derived from each guess
    pub show_rules: bool,
}

/// Line-based prompt over any reader and writer
struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompt and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}: ")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line).context("reading input")? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Yes unless the reply starts with "n"
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .ask(&format!("{prompt} (Y/n)"))?
            .is_some_and(|reply| !reply.to_lowercase().starts_with('n')))
    }
}

/// What the user asked for at the guess prompt
enum Entry {
    Guess(Guess),
    Undo,
    New,
    Quit,
}

enum Outcome {
    Won(Word),
    Lost,
    Restart,
    Quit,
}

/// Run games until the user quits
///
/// # Errors
/// Fails on I/O errors reading input, writing output or recording the answer.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut Session,
    history: &mut SolvedHistory,
    options: PlayOptions,
    input: R,
    out: W,
) -> Result<()> {
    let mut console = Console { input, out };
    print_intro(&mut console.out, session)?;

    loop {
        let outcome = play_game(&mut console, session, options)?;
        match outcome {
            Outcome::Quit => break,
            Outcome::Restart => {
                session.reset();
                writeln!(console.out, "\n🔄 New game started!\n")?;
                continue;
            }
            Outcome::Won(word) => {
                writeln!(
                    console.out,
                    "\n🎉 {} The word is {}",
                    "Solved!".bright_green().bold(),
                    word.text().to_uppercase().bright_yellow().bold()
                )?;
                finish_game(&mut console, history, options, Some(word), session.word_length())?;
            }
            Outcome::Lost => {
                writeln!(console.out, "\n{}", "Out of guesses.".red().bold())?;
                finish_game(&mut console, history, options, None, session.word_length())?;
            }
        }

        if !console.confirm("Play again?")? {
            break;
        }
        session.reset();
        writeln!(console.out, "\n🔄 New game started!\n")?;
    }

    writeln!(console.out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn print_intro(out: &mut impl Write, session: &Session) -> Result<()> {
    writeln!(
        out,
        "\n{}",
        "Wordle Assistant - Interactive Mode".bright_cyan().bold()
    )?;
    writeln!(
        out,
        "{} words of {} letters loaded.\n",
        session.vocabulary().len(),
        session.word_length()
    )?;
    writeln!(out, "Enter each guess, then its tile colors:")?;
    writeln!(out, "  - g for green (correct position)")?;
    writeln!(out, "  - y for yellow (wrong position)")?;
    writeln!(out, "  - b or - for gray (not in word)\n")?;
    writeln!(out, "Commands: 'undo', 'new', 'quit'\n")?;
    Ok(())
}

/// One game, from a fresh session to a win, loss or command
fn play_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
    options: PlayOptions,
) -> Result<Outcome> {
    loop {
        if session.history().len() >= options.max_guesses {
            return Ok(Outcome::Lost);
        }

        writeln!(
            console.out,
            "\n{}",
            format!(
                "Turn {}: {} candidates remaining",
                session.history().len() + 1,
                session.candidates().len()
            )
            .bright_white()
            .bold()
        )?;

        let guess = match read_entry(console, session.word_length())? {
            Entry::Guess(guess) => guess,
            Entry::Quit => return Ok(Outcome::Quit),
            Entry::New => return Ok(Outcome::Restart),
            Entry::Undo => {
                match session.undo() {
                    Ok(undone) => writeln!(console.out, "✓ Undid {undone}")?,
                    Err(_) => writeln!(console.out, "Nothing to undo!")?,
                }
                continue;
            }
        };

        let solved = guess.is_solved().then(|| guess.letters().clone());
        let number = session.history().len() + 1;
        let turn = session.apply(guess)?;
        write_turn(&mut console.out, number, turn, options.show_rules)?;

        if let Some(word) = solved {
            return Ok(Outcome::Won(word));
        }
        if let Ok(word) = session.winning_word() {
            return Ok(Outcome::Won(word.clone()));
        }

        if session.candidates().is_empty() {
            writeln!(
                console.out,
                "\n{}",
                "❌ No candidates remain! Your feedback may be incorrect.".red()
            )?;
            writeln!(console.out, "Type 'undo' to go back, or 'new' to start over.")?;
            continue;
        }

        write_candidates(
            &mut console.out,
            session.candidate_ratings(),
            CANDIDATE_LIMIT,
        )?;
        match session.suggest() {
            Ok(suggestions) => write_suggestions(&mut console.out, &suggestions)?,
            Err(e) => warn!("no suggestions: {e}"),
        }
    }
}

/// Read a guess and its colors, or a command
///
/// Single-letter command shortcuts are guesses when words are one letter long.
fn read_entry<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    word_length: usize,
) -> Result<Entry> {
    loop {
        let Some(letters) = console.ask("Guess")? else {
            return Ok(Entry::Quit);
        };
        match letters.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => return Ok(Entry::Quit),
            "new" => return Ok(Entry::New),
            "undo" => return Ok(Entry::Undo),
            "q" if word_length > 1 => return Ok(Entry::Quit),
            "n" if word_length > 1 => return Ok(Entry::New),
            "u" if word_length > 1 => return Ok(Entry::Undo),
            _ => {}
        }

        let Some(codes) = console.ask("Colors")? else {
            return Ok(Entry::Quit);
        };
        match Guess::parse(&letters, &codes) {
            Ok(guess) if guess.len() == word_length => return Ok(Entry::Guess(guess)),
            Ok(guess) => writeln!(
                console.out,
                "❌ {}",
                SessionError::LengthMismatch {
                    expected: word_length,
                    found: guess.len(),
                }
            )?,
            Err(e) => {
                writeln!(console.out, "❌ {e}")?;
                writeln!(console.out, "   Colors: g green, y yellow, b gray")?;
            }
        }
    }
}

/// Offer to record the answer unless practicing
fn finish_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    history: &mut SolvedHistory,
    options: PlayOptions,
    answer: Option<Word>,
    word_length: usize,
) -> Result<()> {
    if options.practice || !console.confirm("Record the answer in the solved list?")? {
        return Ok(());
    }

    let word = match answer {
        Some(word) => word,
        None => match ask_answer(console, word_length)? {
            Some(word) => word,
            None => return Ok(()),
        },
    };

    let recorded = history
        .record(&word)
        .with_context(|| format!("recording {word} in {}", history.path().display()))?;
    let shown = word.text().to_uppercase();
    if recorded {
        info!("{word} added to solved list");
        writeln!(console.out, "✓ Recorded {shown}")?;
    } else {
        writeln!(console.out, "{shown} is already recorded")?;
    }
    Ok(())
}

/// Ask for the answer of a lost game until it reads as a word
///
/// An empty reply or end of input gives up.
fn ask_answer<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    word_length: usize,
) -> Result<Option<Word>> {
    loop {
        let Some(reply) = console.ask("What was the word?")? else {
            return Ok(None);
        };
        if reply.is_empty() {
            return Ok(None);
        }
        match Word::with_length(&reply, word_length) {
            Ok(word) => return Ok(Some(word)),
            Err(e) => writeln!(console.out, "❌ {e}")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SuggestorConfig;
    use crate::wordlists::loader::words_from_slice;
    use std::fs;
    use std::path::PathBuf;

    const OPTIONS: PlayOptions = PlayOptions {
        practice: true,
        max_guesses: 6,
        show_rules: false,
    };

    fn session() -> Session {
        let words = words_from_slice(&["crane", "crate", "grate", "plate", "slate"], 5);
        Session::new(words, SuggestorConfig::default()).unwrap()
    }

    fn temp_history(name: &str) -> (PathBuf, SolvedHistory) {
        let path = std::env::temp_dir().join(format!(
            "wordle_assist_play_{name}_{}.txt",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        let history = SolvedHistory::load(&path).unwrap();
        (path, history)
    }

    fn play(
        script: &str,
        session: &mut Session,
        history: &mut SolvedHistory,
        options: PlayOptions,
    ) -> String {
        let mut out = Vec::new();
        run_play(session, history, options, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn narrows_to_a_win() {
        let (_, mut history) = temp_history("win");
        let mut game = session();
        let text = play("slate\nbbggg\ngrate\nbgggg\nn\n", &mut game, &mut history, OPTIONS);
        assert!(text.contains("CRATE"));
        assert!(text.contains("Thanks for playing"));
        assert_eq!(game.winning_word().unwrap().text(), "crate");
    }

    #[test]
    fn invalid_colors_are_reprompted() {
        let (_, mut history) = temp_history("invalid");
        let mut game = session();
        let text = play("crane\nggxzq\nquit\n", &mut game, &mut history, OPTIONS);
        assert!(text.contains("❌"));
        assert!(game.history().is_empty());
    }

    #[test]
    fn undo_and_end_of_input() {
        let (_, mut history) = temp_history("undo");
        let mut game = session();
        play("slate\nbbggg\nundo\n", &mut game, &mut history, OPTIONS);
        assert_eq!(game.candidates().len(), 5);
    }

    #[test]
    fn records_answer_outside_practice() {
        let (path, mut history) = temp_history("record");
        let mut game = session();
        let options = PlayOptions {
            practice: false,
            ..OPTIONS
        };
        play("plate\nggggg\ny\nn\n", &mut game, &mut history, options);
        assert!(history.contains("plate"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "plate\n");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn lost_game_asks_for_answer() {
        let (path, mut history) = temp_history("lost");
        let mut game = session();
        let options = PlayOptions {
            practice: false,
            max_guesses: 1,
            show_rules: false,
        };
        let text = play("slate\nbbggg\ny\nvapid\nn\n", &mut game, &mut history, options);
        assert!(text.contains("Out of guesses"));
        assert!(history.contains("vapid"));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn malformed_answer_is_asked_again() {
        let (path, mut history) = temp_history("malformed");
        let mut game = session();
        let options = PlayOptions {
            practice: false,
            max_guesses: 1,
            show_rules: false,
        };
        let text = play(
            "slate\nbbggg\ny\ncr4n3\ntwo words\nvapid\nn\n",
            &mut game,
            &mut history,
            options,
        );
        assert_eq!(text.matches("❌").count(), 2);
        assert_eq!(history.words(), ["vapid"]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "vapid\n");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn short_commands_are_guesses_for_one_letter_words() {
        let (_, mut history) = temp_history("one_letter");
        let words = words_from_slice(&["a", "n", "u"], 1);
        let mut game = Session::new(words, SuggestorConfig::default()).unwrap();
        let text = play("n\ng\nn\n", &mut game, &mut history, OPTIONS);
        assert!(text.contains("Solved!"));
        assert!(!text.contains("New game started"));
        assert_eq!(game.winning_word().unwrap().text(), "n");
        assert_eq!(game.history().len(), 1);
    }
}
