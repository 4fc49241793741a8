//! The immutable record of a finished match.

use chrono::{DateTime, Utc};
use parlor_protocol::{GameMove, GameType, PlayerId, RoomCode};
use serde::{Deserialize, Serialize};

use crate::Room;

/// The terminal audit record of one match.
///
/// Assembled exactly once, when a room reaches `Finished`, and never
/// touched again. The move list is an owned deep copy — a host can keep
/// appending to (or clearing) its own move buffer without disturbing a
/// record it already emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameHistory {
    /// Which room the match was played in.
    pub room_code: RoomCode,
    /// What game was played.
    pub game_type: GameType,
    /// Display names of the players seated at finish time.
    pub players: Vec<String>,
    /// Every validated move, in sequence order.
    pub moves: Vec<GameMove>,
    /// The declared winner; `None` for draws and abandonment.
    pub winner: Option<PlayerId>,
    /// When the room was created.
    pub started_at: DateTime<Utc>,
    /// When the match ended.
    pub finished_at: DateTime<Utc>,
}

/// Snapshots a finished room and its move log into a [`GameHistory`].
///
/// `winner` is whatever terminal condition the caller declared — the
/// engine does not infer results. `finished_at` is supplied by the caller
/// so the record stays a pure function of its inputs.
pub fn create_history(
    room: &Room,
    moves: &[GameMove],
    winner: Option<PlayerId>,
    finished_at: DateTime<Utc>,
) -> GameHistory {
    GameHistory {
        room_code: room.code.clone(),
        game_type: room.game_type.clone(),
        players: room.players.iter().map(|p| p.name.clone()).collect(),
        moves: moves.to_vec(),
        winner,
        started_at: room.created_at,
        finished_at,
    }
}
