//! Opponent search over the waiting queue.

use parlor_protocol::MatchRequest;

/// Widest acceptable rating gap when the caller doesn't choose one.
pub const DEFAULT_RATING_RANGE: i32 = 200;

/// Finds the best waiting opponent for `request`.
///
/// A candidate qualifies when it plays the same game type, belongs to a
/// different player, and sits within `rating_range` points of the
/// requester. Among qualifiers the closest rating wins; on a tie the
/// earlier queue entry wins (`min_by_key` keeps the first minimum, which
/// gives the stable first-inserted-first-served order for free).
///
/// Returns `None` when nobody qualifies. This is a read-only scan: the
/// caller owns the queue and must remove both entries itself after a
/// successful pairing, atomically under whatever discipline guards its
/// queue — that is what prevents one waiting player from being matched
/// twice.
pub fn find_match<'q>(
    request: &MatchRequest,
    queue: &'q [MatchRequest],
    rating_range: i32,
) -> Option<&'q MatchRequest> {
    queue
        .iter()
        .filter(|c| c.game_type == request.game_type)
        .filter(|c| c.player_id != request.player_id)
        .filter(|c| (c.rating - request.rating).abs() <= rating_range)
        .min_by_key(|c| (c.rating - request.rating).abs())
}
