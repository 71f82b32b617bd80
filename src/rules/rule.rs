//! Letter rules derived from tile feedback
//!
//! A rule is a pure predicate over a single word. Every kind is evaluated by
//! one `match` in [`Rule::evaluate`].

use crate::core::Word;
use std::collections::BTreeSet;
use std::fmt;

/// The logical constraint a rule expresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleKind {
    /// Letter absent from the word entirely
    NotIn,
    /// Letter appears somewhere
    In,
    /// Letter occupies none of the positions
    NotAt,
    /// Letter appears somewhere, but at none of the positions
    Present,
    /// Letter occupies every position (no claim elsewhere)
    At,
    /// Letter occupies exactly the positions and no others
    OnlyAt,
    /// Letter occurs exactly `positions.len()` times, anywhere
    OnlyNOf,
}

/// An immutable `{kind, letter, positions}` predicate
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rule {
    kind: RuleKind,
    letter: u8,
    positions: BTreeSet<usize>,
}

impl Rule {
    /// Build a rule; the letter is lowercased and positions collapse to a set
    ///
    /// `letter` must be an ASCII letter; debug builds panic otherwise.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::rules::{Rule, RuleKind};
    ///
    /// let rule = Rule::new(RuleKind::At, 'C', [0, 0]);
    /// assert_eq!(rule.letter(), b'c');
    /// assert_eq!(rule.positions().len(), 1);
    /// ```
    #[must_use]
    pub fn new(kind: RuleKind, letter: char, positions: impl IntoIterator<Item = usize>) -> Self {
        debug_assert!(letter.is_ascii_alphabetic(), "rule letter {letter:?} is not a-z");
        Self {
            kind,
            letter: letter.to_ascii_lowercase() as u8,
            positions: positions.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn not_in(letter: char) -> Self {
        Self::new(RuleKind::NotIn, letter, std::iter::empty())
    }

    #[must_use]
    pub fn is_in(letter: char) -> Self {
        Self::new(RuleKind::In, letter, std::iter::empty())
    }

    #[must_use]
    pub fn not_at(letter: char, positions: impl IntoIterator<Item = usize>) -> Self {
        Self::new(RuleKind::NotAt, letter, positions)
    }

    #[must_use]
    pub fn present(letter: char, positions: impl IntoIterator<Item = usize>) -> Self {
        Self::new(RuleKind::Present, letter, positions)
    }

    #[must_use]
    pub fn at(letter: char, positions: impl IntoIterator<Item = usize>) -> Self {
        Self::new(RuleKind::At, letter, positions)
    }

    #[must_use]
    pub fn only_at(letter: char, positions: impl IntoIterator<Item = usize>) -> Self {
        Self::new(RuleKind::OnlyAt, letter, positions)
    }

    #[must_use]
    pub fn only_n_of(letter: char, positions: impl IntoIterator<Item = usize>) -> Self {
        Self::new(RuleKind::OnlyNOf, letter, positions)
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &BTreeSet<usize> {
        &self.positions
    }

    /// Highest position this rule reads, if any
    #[must_use]
    pub fn max_position(&self) -> Option<usize> {
        self.positions.last().copied()
    }

    /// Evaluate the rule against a word
    ///
    /// Positions must be within the word; callers guarantee equal lengths.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    /// use wordle_assist::rules::Rule;
    ///
    /// let word = Word::new("sassy").unwrap();
    /// assert!(Rule::only_at('s', [0, 2, 3]).evaluate(&word));
    /// assert!(!Rule::only_at('s', [0]).evaluate(&word));
    /// assert!(Rule::only_n_of('s', [1, 2, 4]).evaluate(&word));
    /// ```
    #[must_use]
    pub fn evaluate(&self, word: &Word) -> bool {
        let letter = self.letter;
        let not_at = || self.positions.iter().all(|&p| word.char_at(p) != letter);

        match self.kind {
            RuleKind::NotIn => !word.has_letter(letter),
            RuleKind::In => word.has_letter(letter),
            RuleKind::NotAt => not_at(),
            RuleKind::Present => not_at() && word.has_letter(letter),
            RuleKind::At => self.positions.iter().all(|&p| word.char_at(p) == letter),
            RuleKind::OnlyAt => word
                .as_bytes()
                .iter()
                .enumerate()
                .all(|(i, &ch)| (ch == letter) == self.positions.contains(&i)),
            RuleKind::OnlyNOf => word.count_of(letter) == self.positions.len(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = char::from(self.letter);
        let positions = &self.positions;
        match self.kind {
            RuleKind::NotIn => write!(f, "{letter} is not in word"),
            RuleKind::In => write!(f, "{letter} is in word"),
            RuleKind::NotAt => write!(f, "{letter} is not at {positions:?}"),
            RuleKind::Present => write!(f, "{letter} is in word but not at {positions:?}"),
            RuleKind::At => write!(f, "{letter} is at {positions:?}"),
            RuleKind::OnlyAt => write!(f, "{letter} is only at {positions:?}"),
            RuleKind::OnlyNOf => write!(f, "{letter} appears exactly {} times", positions.len()),
        }
    }
}
