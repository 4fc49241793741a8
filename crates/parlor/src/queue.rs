//! The matchmaking queue.
//!
//! The engine's `find_match` is a read-only scan; this queue is the
//! structure that makes pairing safe. `request_match` tests and removes in
//! one call on `&mut self`, so under the lobby's single thread of control
//! a waiting player can never be handed to two different opponents.

use parlor_engine::find_match;
use parlor_protocol::{MatchRequest, PlayerId};

use crate::LobbyError;

/// What became of a match request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pairing {
    /// A compatible opponent was waiting; their entry has been removed
    /// from the queue and the requester was never enqueued. The caller
    /// creates a room and seats both.
    Matched { opponent: MatchRequest },

    /// Nobody compatible is waiting; the request was enqueued at this
    /// 1-based position.
    Queued { position: usize },
}

/// Players waiting to be paired, in arrival order.
///
/// Arrival order matters: it is the tie-break when two candidates sit at
/// the same rating distance.
#[derive(Debug, Default)]
pub struct MatchQueue {
    entries: Vec<MatchRequest>,
}

impl MatchQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pairs the request with the best waiting opponent, or enqueues it.
    ///
    /// Rejects a player who already has an entry — one search per player
    /// at a time.
    pub fn request_match(
        &mut self,
        request: MatchRequest,
        rating_range: i32,
    ) -> Result<Pairing, LobbyError> {
        if self.position(&request.player_id).is_some() {
            return Err(LobbyError::AlreadyQueued(request.player_id));
        }

        match find_match(&request, &self.entries, rating_range) {
            Some(found) => {
                let opponent_id = found.player_id.clone();
                let idx = self
                    .entries
                    .iter()
                    .position(|e| e.player_id == opponent_id)
                    .expect("match came from this queue");
                let opponent = self.entries.remove(idx);
                tracing::info!(
                    requester = %request.player_id,
                    opponent = %opponent.player_id,
                    game = %request.game_type,
                    gap = (opponent.rating - request.rating).abs(),
                    "match made"
                );
                Ok(Pairing::Matched { opponent })
            }
            None => {
                self.entries.push(request);
                let position = self.entries.len();
                tracing::debug!(position, "no compatible opponent, queued");
                Ok(Pairing::Queued { position })
            }
        }
    }

    /// Withdraws a player's entry, returning it.
    pub fn cancel(&mut self, player_id: &PlayerId) -> Result<MatchRequest, LobbyError> {
        let idx = self
            .entries
            .iter()
            .position(|e| &e.player_id == player_id)
            .ok_or_else(|| LobbyError::NotQueued(player_id.clone()))?;
        let entry = self.entries.remove(idx);
        tracing::debug!(player = %player_id, "left the matchmaking queue");
        Ok(entry)
    }

    /// A player's 1-based queue position, if they are waiting.
    pub fn position(&self, player_id: &PlayerId) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| &e.player_id == player_id)
            .map(|i| i + 1)
    }

    /// Number of waiting players.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nobody is waiting.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The waiting entries, in arrival order.
    pub fn entries(&self) -> &[MatchRequest] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use parlor_engine::DEFAULT_RATING_RANGE;
    use parlor_protocol::GameType;

    fn req(id: &str, rating: i32, game: &str) -> MatchRequest {
        MatchRequest {
            player_id: PlayerId::from(id),
            rating,
            game_type: GameType::from(game),
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_request_match_empty_queue_enqueues() {
        let mut queue = MatchQueue::new();

        let pairing = queue
            .request_match(req("a", 1000, "snake"), DEFAULT_RATING_RANGE)
            .unwrap();

        assert_eq!(pairing, Pairing::Queued { position: 1 });
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_request_match_pairs_and_dequeues_both() {
        let mut queue = MatchQueue::new();
        queue
            .request_match(req("a", 1000, "snake"), DEFAULT_RATING_RANGE)
            .unwrap();

        let pairing = queue
            .request_match(req("b", 1050, "snake"), DEFAULT_RATING_RANGE)
            .unwrap();

        // a's entry is removed and b was never enqueued.
        assert!(matches!(
            pairing,
            Pairing::Matched { opponent } if opponent.player_id == PlayerId::from("a")
        ));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_request_match_different_game_types_wait_separately() {
        let mut queue = MatchQueue::new();
        queue
            .request_match(req("a", 1000, "snake"), DEFAULT_RATING_RANGE)
            .unwrap();

        let pairing = queue
            .request_match(req("b", 1000, "checkers"), DEFAULT_RATING_RANGE)
            .unwrap();

        assert_eq!(pairing, Pairing::Queued { position: 2 });
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_request_match_duplicate_player_is_refused() {
        let mut queue = MatchQueue::new();
        queue
            .request_match(req("a", 1000, "snake"), DEFAULT_RATING_RANGE)
            .unwrap();

        let result = queue.request_match(req("a", 1000, "snake"), DEFAULT_RATING_RANGE);

        assert_eq!(result, Err(LobbyError::AlreadyQueued(PlayerId::from("a"))));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_request_match_picks_closest_of_several() {
        let mut queue = MatchQueue::new();
        for entry in [
            req("a", 1000, "snake"),
            req("b", 1100, "snake"),
            req("c", 1500, "snake"),
        ] {
            queue.request_match(entry, DEFAULT_RATING_RANGE).unwrap();
        }

        let pairing = queue
            .request_match(req("x", 1020, "snake"), DEFAULT_RATING_RANGE)
            .unwrap();

        assert!(matches!(
            pairing,
            Pairing::Matched { opponent } if opponent.player_id == PlayerId::from("a")
        ));
        // Only a's entry left the queue.
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.position(&PlayerId::from("b")), Some(1));
        assert_eq!(queue.position(&PlayerId::from("c")), Some(2));
    }

    #[test]
    fn test_cancel_removes_entry() {
        let mut queue = MatchQueue::new();
        queue
            .request_match(req("a", 1000, "snake"), DEFAULT_RATING_RANGE)
            .unwrap();

        let removed = queue.cancel(&PlayerId::from("a")).unwrap();

        assert_eq!(removed.player_id, PlayerId::from("a"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel_unknown_player_is_refused() {
        let mut queue = MatchQueue::new();

        let result = queue.cancel(&PlayerId::from("ghost"));

        assert_eq!(result, Err(LobbyError::NotQueued(PlayerId::from("ghost"))));
    }

    #[test]
    fn test_position_tracks_arrival_order() {
        let mut queue = MatchQueue::new();
        queue
            .request_match(req("a", 1000, "snake"), DEFAULT_RATING_RANGE)
            .unwrap();
        queue
            .request_match(req("b", 2000, "snake"), DEFAULT_RATING_RANGE)
            .unwrap();

        assert_eq!(queue.position(&PlayerId::from("a")), Some(1));
        assert_eq!(queue.position(&PlayerId::from("b")), Some(2));
        assert_eq!(queue.position(&PlayerId::from("ghost")), None);
    }
}
