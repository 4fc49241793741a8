//! Elo-style rating update.

/// K-factor when the caller doesn't choose one. Higher values make ratings
/// more volatile.
pub const DEFAULT_K_FACTOR: f64 = 32.0;

/// Both players' post-match ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingUpdate {
    /// The winner's new rating.
    pub winner: i32,
    /// The loser's new rating.
    pub loser: i32,
}

/// Probability that a player rated `rating` beats one rated `opponent`.
pub fn expected_score(rating: i32, opponent: i32) -> f64 {
    1.0 / (1.0 + 10_f64.powf((opponent - rating) as f64 / 400.0))
}

/// Computes post-match ratings for a decisive two-player result.
///
/// The winner gains `k * (1 - expected)` and the loser gives up the same
/// amount before rounding, so an upset (low-rated winner, expectation near
/// zero) swings far more points than a win that was already predicted.
/// Exactly two rating-bearing sides are supported; games with more
/// competing sides are out of scope for this function.
pub fn update_ratings(winner_rating: i32, loser_rating: i32, k_factor: f64) -> RatingUpdate {
    let expected_win = expected_score(winner_rating, loser_rating);
    RatingUpdate {
        winner: (winner_rating as f64 + k_factor * (1.0 - expected_win)).round() as i32,
        loser: (loser_rating as f64 - k_factor * (1.0 - expected_win)).round() as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_score_even_match_is_half() {
        let e = expected_score(1000, 1000);
        assert!((e - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_expected_score_favors_higher_rating() {
        assert!(expected_score(1200, 800) > 0.9);
        assert!(expected_score(800, 1200) < 0.1);
    }

    #[test]
    fn test_expected_scores_sum_to_one() {
        let a = expected_score(1130, 970);
        let b = expected_score(970, 1130);
        assert!((a + b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_ratings_even_match_moves_both_sides() {
        let update = update_ratings(1000, 1000, DEFAULT_K_FACTOR);

        assert!(update.winner > 1000);
        assert!(update.loser < 1000);
        // Even match with k=32: half the k-factor each way.
        assert_eq!(update.winner, 1016);
        assert_eq!(update.loser, 984);
    }

    #[test]
    fn test_update_ratings_upset_swings_more_than_expected_win() {
        // The defining Elo property: a 800-rated player beating a 1200 gains
        // strictly more than a 1200 beating an 800.
        let upset = update_ratings(800, 1200, DEFAULT_K_FACTOR);
        let expected = update_ratings(1200, 800, DEFAULT_K_FACTOR);

        let upset_gain = upset.winner - 800;
        let expected_gain = expected.winner - 1200;
        assert!(
            upset_gain > expected_gain,
            "upset gain {upset_gain} must exceed expected-win gain {expected_gain}"
        );
    }

    #[test]
    fn test_update_ratings_upset_loss_costs_more() {
        let upset = update_ratings(800, 1200, DEFAULT_K_FACTOR);
        let expected = update_ratings(1200, 800, DEFAULT_K_FACTOR);

        let upset_loss = 1200 - upset.loser;
        let expected_loss = 800 - expected.loser;
        assert!(upset_loss > expected_loss);
    }

    #[test]
    fn test_update_ratings_respects_k_factor() {
        let small_k = update_ratings(1000, 1000, 16.0);
        let large_k = update_ratings(1000, 1000, 32.0);

        assert!(large_k.winner - 1000 > small_k.winner - 1000);
    }

    #[test]
    fn test_update_ratings_predicted_win_changes_little() {
        // A 1200 beating an 800 was ~91% expected; the transfer rounds to
        // a handful of points.
        let update = update_ratings(1200, 800, DEFAULT_K_FACTOR);
        assert_eq!(update.winner, 1203);
        assert_eq!(update.loser, 797);
    }
}
