//! Formatting utilities for terminal output

/// Number of stars for the best item of a batch
pub const MAX_STARS: usize = 10;

/// Rate each score from 0 to 10 stars, linear against the batch maximum
///
/// A batch whose maximum is not positive rates everything 0.
///
/// # Examples
/// ```
/// use wordle_assist::output::formatters::star_ratings;
///
/// assert_eq!(star_ratings(&[2.0, 1.0, 0.26]), vec![10, 5, 1]);
/// assert_eq!(star_ratings(&[0.0, 0.0]), vec![0, 0]);
/// ```
#[must_use]
pub fn star_ratings(scores: &[f64]) -> Vec<usize> {
    let max = scores.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0; scores.len()];
    }
    scores
        .iter()
        .map(|&score| (score.max(0.0) / max * MAX_STARS as f64).round() as usize)
        .collect()
}

/// A row of `count` stars
#[must_use]
pub fn stars(count: usize) -> String {
    "*".repeat(count)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_scale_to_batch_max() {
        assert_eq!(star_ratings(&[4.0, 2.0, 1.0, 0.0]), vec![10, 5, 3, 0]);
        assert_eq!(star_ratings(&[0.5]), vec![10]);
    }

    #[test]
    fn zero_batch_rates_zero() {
        assert_eq!(star_ratings(&[0.0, 0.0, 0.0]), vec![0, 0, 0]);
        assert!(star_ratings(&[]).is_empty());
    }

    #[test]
    fn star_row() {
        assert_eq!(stars(3), "***");
        assert_eq!(stars(0), "");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
