//! Display functions for command results
//!
//! Everything writes to a caller-supplied `Write` so the interactive loop
//! and the one-shot commands share the same rendering.

use super::formatters::{create_progress_bar, star_ratings, stars};
use crate::commands::{BenchmarkResult, CorpusStats, SolveResult, SuggestReport};
use crate::core::{Code, Guess, Word};
use crate::solver::{Suggestion, Turn};
use colored::Colorize;
use std::io::{self, Write};

/// Tile letters colored by their feedback
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    guess
        .letters()
        .text()
        .to_uppercase()
        .chars()
        .zip(guess.codes())
        .map(|(ch, code)| {
            let tile = format!(" {ch} ");
            match code {
                Code::Correct => tile.black().on_green().to_string(),
                Code::Present => tile.black().on_yellow().to_string(),
                Code::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// One applied guess with its candidate reduction
///
/// # Errors
/// Propagates write errors.
pub fn write_turn(
    out: &mut impl Write,
    number: usize,
    turn: &Turn,
    verbose: bool,
) -> io::Result<()> {
    writeln!(
        out,
        "Turn {number}: {} {}  {} → {}",
        colored_guess(&turn.guess),
        turn.guess.to_emoji(),
        turn.candidates_before,
        turn.candidates_after.to_string().bright_cyan()
    )?;
    if verbose {
        for rule in &turn.rules {
            writeln!(out, "    {}", rule.to_string().bright_black())?;
        }
    }
    Ok(())
}

/// Suggestions best first, starred against the best score
///
/// # Errors
/// Propagates write errors.
pub fn write_suggestions(out: &mut impl Write, suggestions: &[Suggestion]) -> io::Result<()> {
    let scores: Vec<f64> = suggestions.iter().map(|s| s.score).collect();
    let ratings = star_ratings(&scores);

    writeln!(out, "\n💡 {}", "Suggested guesses:".bright_cyan().bold())?;
    for (suggestion, rating) in suggestions.iter().zip(ratings).rev() {
        writeln!(
            out,
            "   {} {:8.4}  {}",
            suggestion.word.text().to_uppercase().bright_white().bold(),
            suggestion.score,
            stars(rating).yellow()
        )?;
    }
    Ok(())
}

/// Remaining candidates best first, at most `limit` of them
///
/// # Errors
/// Propagates write errors.
pub fn write_candidates<'a>(
    out: &mut impl Write,
    ratings: impl IntoIterator<Item = (&'a Word, f64)>,
    limit: usize,
) -> io::Result<()> {
    let mut ratings: Vec<(&Word, f64)> = ratings.into_iter().collect();
    ratings.sort_by(|(w1, r1), (w2, r2)| r2.total_cmp(r1).then_with(|| w1.cmp(w2)));

    let scores: Vec<f64> = ratings.iter().map(|&(_, r)| r).collect();
    let stars_per_word = star_ratings(&scores);

    writeln!(
        out,
        "\n📋 {} ({})",
        "Remaining candidates:".bright_cyan().bold(),
        ratings.len()
    )?;
    for ((word, _), rating) in ratings.iter().zip(stars_per_word).take(limit) {
        writeln!(out, "   • {} {}", word.text().to_uppercase(), stars(rating).yellow())?;
    }
    if ratings.len() > limit {
        writeln!(out, "   … and {} more", ratings.len() - limit)?;
    }
    Ok(())
}

/// Print the guesses replayed by the suggest command and what they leave
///
/// # Errors
/// Propagates write errors.
pub fn write_suggest_report(
    out: &mut impl Write,
    report: &SuggestReport,
    limit: usize,
    verbose: bool,
) -> io::Result<()> {
    for (i, turn) in report.turns.iter().enumerate() {
        write_turn(out, i + 1, turn, verbose)?;
    }

    if let Some(winner) = &report.winner {
        writeln!(
            out,
            "\n🎯 The answer is {}",
            winner.text().to_uppercase().bright_green().bold()
        )?;
        return Ok(());
    }
    if report.candidates.is_empty() {
        writeln!(
            out,
            "\n{}",
            "❌ No candidates remain! Check the feedback codes.".red().bold()
        )?;
        return Ok(());
    }

    write_candidates(out, report.candidates.iter().map(|(w, r)| (w, *r)), limit)?;
    write_suggestions(out, &report.suggestions)
}

/// Print the result of solving a word
///
/// # Errors
/// Propagates write errors.
pub fn write_solve_result(out: &mut impl Write, result: &SolveResult) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (i, step) in result.steps.iter().enumerate() {
        writeln!(
            out,
            "Turn {}: {} {}  {} → {}",
            i + 1,
            colored_guess(&step.guess),
            step.guess.to_emoji(),
            step.candidates_before,
            step.candidates_after
        )?;
    }

    writeln!(out)?;
    if result.success {
        writeln!(
            out,
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        )
    } else {
        writeln!(
            out,
            "{}",
            format!("❌ Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        )
    }
}

/// Print the result of a benchmark
///
/// # Errors
/// Propagates write errors.
pub fn write_benchmark_result(
    out: &mut impl Write,
    result: &BenchmarkResult,
    guess_limit: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(out, " {} ", "BENCHMARK RESULTS".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "\n📊 {}", "Performance:".bright_cyan().bold())?;
    writeln!(out, "   Words tested:     {}", result.total_words)?;
    writeln!(
        out,
        "   Solved:           {}",
        result.solved.to_string().green()
    )?;
    writeln!(
        out,
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    )?;
    writeln!(out, "   Best case:        {}", result.min_guesses.to_string().green())?;
    writeln!(out, "   Worst case:       {}", result.max_guesses.to_string().yellow())?;
    writeln!(out, "   Time taken:       {:.2}s", result.duration.as_secs_f64())?;
    writeln!(out, "   Words/second:     {:.1}", result.words_per_second)?;

    writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
    for guess_count in 1..=guess_limit {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            writeln!(out, "   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green())?;
        }
    }

    if !result.failed.is_empty() {
        let failed: Vec<String> = result
            .failed
            .iter()
            .map(|w| w.text().to_uppercase())
            .collect();
        writeln!(
            out,
            "\n❌ {} {}",
            "Failed:".red().bold(),
            failed.join(", ")
        )?;
    }
    Ok(())
}

/// Print corpus letter and bigram frequencies
///
/// # Errors
/// Propagates write errors.
pub fn write_corpus_stats(out: &mut impl Write, stats: &CorpusStats) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} words",
        "CORPUS STATISTICS:".bright_cyan().bold(),
        stats.total_words
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(
        out,
        "\n🔤 {}",
        "Letters (share of words containing, occurrences per word):"
            .bright_cyan()
            .bold()
    )?;
    for (letter, rate) in stats.letters_by_rate() {
        if rate <= 0.0 {
            continue;
        }
        writeln!(
            out,
            "   {} [{}] {:5.3}  {:5.3}",
            char::from(letter).to_ascii_uppercase(),
            create_progress_bar(rate, 1.0, 30).green(),
            rate,
            stats.occurrence.rate(letter)
        )?;
    }

    writeln!(out, "\n🔗 {}", "Top bigrams:".bright_cyan().bold())?;
    for (pair, rate) in &stats.bigrams {
        writeln!(
            out,
            "   {}{}  {rate:5.3}",
            char::from(pair[0]).to_ascii_uppercase(),
            char::from(pair[1]).to_ascii_uppercase()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn suggestion(word: &str, score: f64) -> Suggestion {
        Suggestion {
            word: Word::new(word).unwrap(),
            score,
        }
    }

    #[test]
    fn suggestions_print_best_first() {
        let ranked = [suggestion("crate", 1.0), suggestion("slate", 2.0)];
        let text = render(|out| write_suggestions(out, &ranked));
        let slate = text.find("SLATE").unwrap();
        let crate_pos = text.find("CRATE").unwrap();
        assert!(slate < crate_pos);
        assert!(text.contains("**********"));
    }

    #[test]
    fn candidates_are_limited() {
        let words: Vec<Word> = ["crane", "crate", "grate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let ratings = words.iter().zip([1.0, 3.0, 2.0]);
        let text = render(|out| write_candidates(out, ratings, 2));
        assert!(text.find("CRATE").unwrap() < text.find("GRATE").unwrap());
        assert!(!text.contains("CRANE"));
        assert!(text.contains("1 more"));
    }

    #[test]
    fn verbose_turn_lists_rules() {
        let guess = Guess::parse("crane", "gbbbb").unwrap();
        let turn = Turn {
            rules: crate::rules::score_guess(&guess).rules,
            guess,
            candidates_before: 5,
            candidates_after: 1,
        };

        let verbose = render(|out| write_turn(out, 1, &turn, true));
        assert!(verbose.contains("Turn 1:"));
        assert!(verbose.contains("c is at"));
        assert!(verbose.contains("r is not in word"));
        assert_eq!(verbose.lines().count(), 1 + turn.rules.len());

        let quiet = render(|out| write_turn(out, 1, &turn, false));
        assert!(!quiet.contains("is not in word"));
        assert_eq!(quiet.lines().count(), 1);
    }

    #[test]
    fn colored_guess_keeps_letters() {
        let guess = Guess::parse("crane", "gybbb").unwrap();
        let tiles = colored_guess(&guess);
        for ch in ["C", "R", "A", "N", "E"] {
            assert!(tiles.contains(ch));
        }
    }
}
