//! Shared-letter subset rating
//!
//! A guess word is rated by how many candidates share large letter subsets
//! with it. For every subset of at least four of the guess's positions
//! (every position, for shorter words), take the letter multiset of that
//! subset. Then count the candidates holding each of those letters exactly
//! as many times. The rating is the sum over all subsets.

use super::frequency::FrequencyError;
use crate::core::{Word, letter_index};
use rayon::prelude::*;

/// Smallest subset size considered
const MIN_SUBSET: usize = 4;

/// Rate `word` against `candidates` by shared letter subsets
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::stats::shared_letter_rating;
///
/// let word = Word::new("crane").unwrap();
/// let candidates = vec![Word::new("caner").unwrap(), Word::new("fghij").unwrap()];
/// // "caner" uses the same five letters, so it matches all six 4+ subsets
/// assert_eq!(shared_letter_rating(&word, &candidates), 6);
/// ```
#[must_use]
pub fn shared_letter_rating(word: &Word, candidates: &[Word]) -> usize {
    let len = word.len();
    let min_size = MIN_SUBSET.min(len);
    let letters = word.as_bytes();

    let mut total = 0;
    for mask in 1u32..(1 << len) {
        if (mask.count_ones() as usize) < min_size {
            continue;
        }

        let mut counts = [0usize; 26];
        for (i, &letter) in letters.iter().enumerate() {
            if mask & (1 << i) != 0 {
                counts[letter_index(letter)] += 1;
            }
        }

        total += candidates
            .iter()
            .filter(|candidate| {
                counts
                    .iter()
                    .enumerate()
                    .filter(|&(_, &n)| n > 0)
                    .all(|(idx, &n)| candidate.count_of(b'a' + idx as u8) == n)
            })
            .count();
    }
    total
}

/// Rank `vocabulary` by shared-letter rating against `candidates`
///
/// Sorted ascending by `(rating, word)`; the best `top_n` words come last.
///
/// # Errors
/// Returns `FrequencyError::EmptyWordList` if either list is empty.
pub fn rank_by_shared_letters(
    vocabulary: &[Word],
    candidates: &[Word],
    top_n: usize,
) -> Result<Vec<(Word, usize)>, FrequencyError> {
    if vocabulary.is_empty() || candidates.is_empty() {
        return Err(FrequencyError::EmptyWordList);
    }

    let mut rated: Vec<(Word, usize)> = vocabulary
        .par_iter()
        .map(|word| (word.clone(), shared_letter_rating(word, candidates)))
        .collect();

    rated.sort_by(|(w1, r1), (w2, r2)| r1.cmp(r2).then_with(|| w1.cmp(w2)));
    let skip = rated.len().saturating_sub(top_n);
    Ok(rated.split_off(skip))
}
