//! The room entity and its lifecycle state machine.

use chrono::{DateTime, Utc};
use parlor_protocol::{GameType, PlayerId, RoomCode};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A seated player: identity plus liveness.
///
/// Identity (`id`, `name`, `rating`) comes from the external profile
/// source; `connected` and `last_seen` are maintained by the presence
/// operations. A player id appears at most once per room, and callers keep
/// a player in at most one open room at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Externally assigned, stable id.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Current skill rating.
    pub rating: i32,
    /// Whether the player currently has a live connection.
    pub connected: bool,
    /// Last time the player was seen alive.
    pub last_seen: DateTime<Utc>,
}

impl Player {
    /// Seats a player: connected, with a fresh `last_seen`.
    pub fn seated(id: PlayerId, name: impl Into<String>, rating: i32, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            rating,
            connected: true,
            last_seen: now,
        }
    }
}

// ---------------------------------------------------------------------------
// RoomStatus
// ---------------------------------------------------------------------------

/// The lifecycle state of a room.
///
/// Transitions only move forward:
///
/// ```text
/// Waiting → Playing → Finished
/// ```
///
/// - **Waiting**: room exists and accepts joins.
/// - **Playing**: game in progress; the seat list is fixed apart from
///   explicit leaves.
/// - **Finished**: terminal. The room is immutable from here on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Waiting,
    Playing,
    Finished,
}

impl RoomStatus {
    /// Returns `true` if the room is accepting new players.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Waiting)
    }

    /// Returns `true` if no further transition exists.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }

    /// The next state in the strict ordering, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Waiting => Some(Self::Playing),
            Self::Playing => Some(Self::Finished),
            Self::Finished => None,
        }
    }

    /// Returns `true` if moving to `target` follows the strict ordering.
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Waiting => write!(f, "waiting"),
            Self::Playing => write!(f, "playing"),
            Self::Finished => write!(f, "finished"),
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// The shared state for one game instance.
///
/// Invariants maintained by the lifecycle operations:
/// - `players.len() <= max_players`
/// - a player id appears at most once in `players`
/// - `status` only advances, never regresses
///
/// `host` is the creator's id and is *not* required to stay connected or
/// even seated; it is a label, not a liveness claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Short, high-entropy, human-typeable identifier.
    pub code: RoomCode,
    /// Id of the player who created the room.
    pub host: PlayerId,
    /// Seated players, in join order.
    pub players: Vec<Player>,
    /// Seat capacity.
    pub max_players: usize,
    /// Lifecycle state.
    pub status: RoomStatus,
    /// What game this room hosts.
    pub game_type: GameType,
    /// Creation time; doubles as the match's `started_at` in the history
    /// record.
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Returns `true` if a player with this id is seated.
    pub fn contains(&self, player_id: &PlayerId) -> bool {
        self.players.iter().any(|p| &p.id == player_id)
    }

    /// Looks up a seated player by id.
    pub fn player(&self, player_id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == player_id)
    }

    /// Returns `true` if every seat is taken.
    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }
}
