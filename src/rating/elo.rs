//! Elo arithmetic
//!
//! Expected scores come from the skillratings crate; rounding to integer
//! ratings and percentages is done here.

use crate::types::Rating;
use skillratings::elo::{expected_score, EloRating};

/// Probability that a participant rated `rating_a` beats one rated `rating_b`
///
/// `1 / (1 + 10^((rating_b - rating_a) / 400))`, always in (0, 1).
pub fn win_probability(rating_a: Rating, rating_b: Rating) -> f64 {
    let (expected_a, _expected_b) = expected_score(
        &EloRating {
            rating: rating_a as f64,
        },
        &EloRating {
            rating: rating_b as f64,
        },
    );
    expected_a
}

/// Convert a probability to a percentage rounded half away from zero to two decimals
pub fn to_percentage(probability: f64) -> f64 {
    (probability * 10_000.0).round() / 100.0
}

/// Apply one Elo step and round half away from zero
///
/// `actual` is 1.0 for a win and 0.0 for a loss.
pub fn adjusted_rating(old_rating: Rating, k_factor: i64, actual: f64, expected: f64) -> Rating {
    (old_rating as f64 + k_factor as f64 * (actual - expected)).round() as Rating
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_ratings_are_even() {
        assert_eq!(win_probability(1000, 1000), 0.5);
        assert_eq!(to_percentage(win_probability(1000, 1000)), 50.0);
    }

    #[test]
    fn test_four_hundred_points_is_ten_to_one() {
        let p = win_probability(1200, 800);
        assert!((p - 10.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(to_percentage(win_probability(1000, 910)), 62.67);
        assert_eq!(to_percentage(win_probability(910, 1000)), 37.33);
        assert_eq!(to_percentage(0.123_46), 12.35);
        assert_eq!(to_percentage(0.0), 0.0);
    }

    #[test]
    fn test_adjusted_rating_rounds_half_away_from_zero() {
        // 1000 + 30 * 0.5 = 1015 exactly
        assert_eq!(adjusted_rating(1000, 30, 1.0, 0.5), 1015);
        // 1000 + 1 * 0.5 = 1000.5 rounds up
        assert_eq!(adjusted_rating(1000, 1, 1.0, 0.5), 1001);
        // 1000 - 1 * 0.5 = 999.5 rounds up as well
        assert_eq!(adjusted_rating(1000, 1, 0.0, 0.5), 1000);
        // 1 - 3 * 0.5 = -0.5 rounds away from zero
        assert_eq!(adjusted_rating(1, 3, 0.0, 0.5), -1);
    }

    #[test]
    fn test_first_upset_step() {
        let p = win_probability(800, 1200);
        assert_eq!(adjusted_rating(800, 30, 1.0, p), 827);
    }
}
