//! Precondition rejections.

use parlor_protocol::{PlayerId, RoomCode};

use crate::RoomStatus;

/// Why a lifecycle or presence operation refused to produce a new room.
///
/// These are ordinary values, not exceptions: every operation that can
/// reject returns `Result<Room, Reject>`, and callers surface the reason
/// or retry against a fresher snapshot. Nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Reject {
    /// The room is past `Waiting` and no longer seats players.
    #[error("room {0} is not accepting players (status {1})")]
    NotJoinable(RoomCode, RoomStatus),

    /// Every seat is taken.
    #[error("room {0} is full ({1} seats)")]
    RoomFull(RoomCode, usize),

    /// The player is already seated in this room.
    #[error("player {0} is already seated in room {1}")]
    AlreadySeated(PlayerId, RoomCode),

    /// The player is not seated in this room.
    #[error("player {0} is not seated in room {1}")]
    UnknownPlayer(PlayerId, RoomCode),

    /// Too few players to begin play.
    #[error("room {code} needs {min} players to start, has {have}")]
    NotEnoughPlayers {
        code: RoomCode,
        min: usize,
        have: usize,
    },

    /// The room is not in `Waiting`, so play cannot begin.
    #[error("room {0} cannot start from status {1}")]
    NotStartable(RoomCode, RoomStatus),
}
