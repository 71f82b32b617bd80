//! Scored guesses: letters plus per-position tile feedback
//!
//! Feedback characters accepted by [`Code::from_char`]:
//! - 'G'/'g'/🟩 for correct (green)
//! - 'Y'/'y'/🟨 for present elsewhere (yellow)
//! - 'B'/'b'/'X'/'x'/'-'/'_'/⬜/⬛ for absent (gray)

use super::word::{Word, WordError, letter_index};
use std::fmt;
use thiserror::Error;

/// Feedback for a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    /// Letter is at this position
    Correct,
    /// Letter is in the word, but not here
    Present,
    /// Letter is not in the word beyond the copies already accounted for
    Absent,
}

impl Code {
    /// Parse one feedback character
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | 'X' | 'x' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Tile emoji for this code
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Error type for malformed guesses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("invalid feedback code '{0}' (use g/y/b)")]
    InvalidCode(char),
    #[error("guess has {letters} letters but {codes} feedback codes")]
    LengthMismatch { letters: usize, codes: usize },
    #[error("invalid guess word: {0}")]
    Word(#[from] WordError),
}

/// A guessed word together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    letters: Word,
    codes: Vec<Code>,
}

impl Guess {
    /// Pair a word with its feedback codes
    ///
    /// # Errors
    /// Returns `GuessError::LengthMismatch` if there is not exactly one code
    /// per letter.
    pub fn new(letters: Word, codes: Vec<Code>) -> Result<Self, GuessError> {
        if letters.len() != codes.len() {
            return Err(GuessError::LengthMismatch {
                letters: letters.len(),
                codes: codes.len(),
            });
        }
        Ok(Self { letters, codes })
    }

    /// Parse a guess from its letters and a feedback string like "gybbg"
    ///
    /// Whitespace in the feedback string is ignored.
    ///
    /// # Errors
    /// Rejects invalid words, unknown feedback characters and length mismatches.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Code, Guess};
    ///
    /// let guess = Guess::parse("crane", "gg-bb").unwrap();
    /// assert_eq!(guess.codes()[0], Code::Correct);
    /// assert_eq!(guess.codes()[2], Code::Absent);
    ///
    /// assert!(Guess::parse("crane", "ggq--").is_err());
    /// assert!(Guess::parse("crane", "gg").is_err());
    /// ```
    pub fn parse(letters: &str, codes: &str) -> Result<Self, GuessError> {
        let word = Word::with_length(letters.trim(), letters.trim().len())?;
        let codes = codes
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Code::from_char(c).ok_or(GuessError::InvalidCode(c)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(word, codes)
    }

    /// Score `guess` against a known `secret` with Wordle's duplicate-letter rules
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present-elsewhere from whatever remains in the pool
    ///
    /// # Panics
    /// Panics if the two words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Guess, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let secret = Word::new("floor").unwrap();
    /// let scored = Guess::against(&guess, &secret);
    /// assert_eq!(scored.to_emoji(), "🟨🟨⬜🟩⬜");
    /// ```
    #[must_use]
    pub fn against(guess: &Word, secret: &Word) -> Self {
        assert_eq!(guess.len(), secret.len(), "guess and secret differ in length");

        let mut codes = vec![Code::Absent; guess.len()];
        let mut available = [0u8; 26];
        for &ch in secret.as_bytes() {
            available[letter_index(ch)] += 1;
        }

        for (i, (&g, &s)) in guess.as_bytes().iter().zip(secret.as_bytes()).enumerate() {
            if g == s {
                codes[i] = Code::Correct;
                available[letter_index(g)] -= 1;
            }
        }

        for (i, &g) in guess.as_bytes().iter().enumerate() {
            if codes[i] != Code::Correct {
                let slot = &mut available[letter_index(g)];
                if *slot > 0 {
                    codes[i] = Code::Present;
                    *slot -= 1;
                }
            }
        }

        Self {
            letters: guess.clone(),
            codes,
        }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &Word {
        &self.letters
    }

    /// Feedback codes, one per letter
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    /// Number of tiles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false for a constructed guess
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Positions where `letter` received `code`
    pub fn positions(&self, letter: u8, code: Code) -> impl Iterator<Item = usize> + '_ {
        self.letters
            .as_bytes()
            .iter()
            .zip(&self.codes)
            .enumerate()
            .filter(move |&(_, (&l, &c))| l == letter && c == code)
            .map(|(i, _)| i)
    }

    /// True when every tile is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.codes.iter().all(|&c| c == Code::Correct)
    }

    /// Feedback rendered as tile emoji
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.codes.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.letters.text().to_uppercase(), self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(s: &str) -> Vec<Code> {
        s.chars().map(|c| Code::from_char(c).unwrap()).collect()
    }

    #[test]
    fn code_parsing_accepts_all_spellings() {
        for ch in ['g', 'G', '🟩'] {
            assert_eq!(Code::from_char(ch), Some(Code::Correct));
        }
        for ch in ['y', 'Y', '🟨'] {
            assert_eq!(Code::from_char(ch), Some(Code::Present));
        }
        for ch in ['b', 'B', 'x', '-', '_', '⬜', '⬛'] {
            assert_eq!(Code::from_char(ch), Some(Code::Absent));
        }
        assert_eq!(Code::from_char('q'), None);
    }

    #[test]
    fn parse_rejects_invalid_code() {
        assert_eq!(
            Guess::parse("crane", "ggqbb"),
            Err(GuessError::InvalidCode('q'))
        );
    }

    #[test]
    fn parse_rejects_length_mismatch() {
        assert_eq!(
            Guess::parse("crane", "ggb"),
            Err(GuessError::LengthMismatch {
                letters: 5,
                codes: 3
            })
        );
    }

    #[test]
    fn parse_rejects_bad_word() {
        assert!(matches!(
            Guess::parse("cr4ne", "ggbbb"),
            Err(GuessError::Word(_))
        ));
    }

    #[test]
    fn parse_ignores_whitespace_in_codes() {
        let guess = Guess::parse("crane", "g g b b y").unwrap();
        assert_eq!(guess.codes(), codes("ggbby").as_slice());
    }

    #[test]
    fn positions_filter_by_letter_and_code() {
        let guess = Guess::parse("sassy", "gbybg").unwrap();
        assert_eq!(guess.positions(b's', Code::Correct).collect::<Vec<_>>(), vec![0]);
        assert_eq!(guess.positions(b's', Code::Present).collect::<Vec<_>>(), vec![2]);
        assert_eq!(guess.positions(b's', Code::Absent).collect::<Vec<_>>(), vec![3]);
        assert_eq!(guess.positions(b'y', Code::Correct).collect::<Vec<_>>(), vec![4]);
        assert_eq!(guess.positions(b'a', Code::Absent).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn against_all_absent() {
        let guess = Word::new("abcde").unwrap();
        let secret = Word::new("fghij").unwrap();
        let scored = Guess::against(&guess, &secret);
        assert_eq!(scored.codes(), codes("bbbbb").as_slice());
    }

    #[test]
    fn against_self_is_solved() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(Guess::against(&w, &w).is_solved());
        }
    }

    #[test]
    fn against_duplicates_in_guess() {
        // SPEED vs ERASE: s yellow, both e yellow, p/d gray
        let guess = Word::new("speed").unwrap();
        let secret = Word::new("erase").unwrap();
        assert_eq!(
            Guess::against(&guess, &secret).codes(),
            codes("ybyyb").as_slice()
        );
    }

    #[test]
    fn against_green_takes_priority_over_yellow() {
        // Second l is green, first l has no copy left
        let guess = Word::new("lolly").unwrap();
        let secret = Word::new("world").unwrap();
        assert_eq!(
            Guess::against(&guess, &secret).codes(),
            codes("bgbgb").as_slice()
        );
    }

    #[test]
    fn display_uses_emoji() {
        let guess = Guess::parse("crane", "gybbb").unwrap();
        assert_eq!(guess.to_string(), "CRANE 🟩🟨⬜⬜⬜");
    }
}
