//! Inbound command shapes.
//!
//! A host translates whatever its transport delivers (WebSocket frames,
//! queue messages, test scripts) into one of these and hands it to the
//! lobby layer. Each variant names the room or player it targets; the
//! engine holds no session state of its own.

use serde::{Deserialize, Serialize};

use crate::{GameMove, GameType, MatchRequest, PlayerId, PlayerProfile, RoomCode};

/// An operation a host can request.
///
/// `#[serde(tag = "type")]` produces internally tagged JSON, so a create
/// looks like `{ "type": "CreateRoom", "host_id": "p1", ... }` — flat and
/// easy to construct from a JavaScript client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Open a new room with the sender as host.
    CreateRoom {
        host_id: PlayerId,
        host_name: String,
        game_type: GameType,
        /// Seat count; the engine default (2) applies when omitted.
        #[serde(default)]
        max_players: Option<usize>,
    },

    /// Seat a resolved player in an existing room.
    JoinRoom {
        room_code: RoomCode,
        player: PlayerProfile,
    },

    /// Remove a player from a room. Legal in any room status.
    LeaveRoom {
        room_code: RoomCode,
        player_id: PlayerId,
    },

    /// Begin play. Requires a waiting room with at least two players.
    StartGame { room_code: RoomCode },

    /// Submit one move for sequence validation and recording.
    SubmitMove {
        room_code: RoomCode,
        #[serde(rename = "move")]
        game_move: GameMove,
    },

    /// Mark a seated player as having lost their connection.
    Disconnect {
        room_code: RoomCode,
        player_id: PlayerId,
    },

    /// Restore a seated player's connection.
    Reconnect {
        room_code: RoomCode,
        player_id: PlayerId,
    },

    /// End the game and produce the immutable history record.
    /// `winner` is `None` for draws and abandonment.
    FinishGame {
        room_code: RoomCode,
        winner: Option<PlayerId>,
    },

    /// Enter the matchmaking queue (or pair immediately if a compatible
    /// opponent is already waiting).
    RequestMatch { request: MatchRequest },

    /// Leave the matchmaking queue without being paired.
    CancelMatch { player_id: PlayerId },
}
