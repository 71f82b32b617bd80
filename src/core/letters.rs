//! Alphabet letters that have not been guessed yet

use super::word::letter_index;
use std::fmt;

const ALL_LETTERS: u32 = (1 << 26) - 1;

/// Set of letters never guessed so far, stored as a 26-bit mask
///
/// Starts full and only ever shrinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownLetters(u32);

impl UnknownLetters {
    /// Every letter a-z is unknown
    #[must_use]
    pub const fn all() -> Self {
        Self(ALL_LETTERS)
    }

    /// Check whether `letter` is still unknown
    #[inline]
    #[must_use]
    pub fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << letter_index(letter)) != 0
    }

    /// Remove the given letters from the unknown set
    pub fn mark_seen(&mut self, letters: impl IntoIterator<Item = u8>) {
        for letter in letters {
            if letter.is_ascii_lowercase() {
                self.0 &= !(1 << letter_index(letter));
            }
        }
    }

    /// Number of unknown letters
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Unknown letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&l| self.contains(l))
    }
}

impl Default for UnknownLetters {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for UnknownLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}
