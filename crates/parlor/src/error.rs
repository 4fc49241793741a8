//! Error types for the lobby layer.

use parlor_engine::{Reject, RoomStatus};
use parlor_protocol::{PlayerId, RoomCode};

/// Why a lobby command was refused.
///
/// Engine-level precondition rejections pass through as [`Reject`];
/// everything else is a registry- or queue-level condition the engine has
/// no way to see (it never holds more than one room at a time). All of
/// these are recoverable — a caller re-issues against fresher state or
/// reports the reason to the player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LobbyError {
    /// No live room with this code.
    #[error("room {0} not found")]
    RoomNotFound(RoomCode),

    /// The player is seated in a different open room.
    #[error("player {0} is already seated in room {1}")]
    PlayerBusy(PlayerId, RoomCode),

    /// The player already has a queue entry.
    #[error("player {0} is already waiting for a match")]
    AlreadyQueued(PlayerId),

    /// No queue entry to cancel for this player.
    #[error("player {0} is not waiting for a match")]
    NotQueued(PlayerId),

    /// Moves are only accepted while a game is in progress.
    #[error("room {0} is not in play (status {1})")]
    NotPlaying(RoomCode, RoomStatus),

    /// The move failed structural or ordering validation.
    #[error("move rejected in room {code}: got sequence {got}, expected {expected}")]
    MoveRejected {
        code: RoomCode,
        got: u64,
        expected: u64,
    },

    /// An engine precondition rejection, unchanged.
    #[error(transparent)]
    Rejected(#[from] Reject),
}
