//! Identity newtypes and the data shapes that cross the engine boundary.
//!
//! Ids are strings, not integers: identity is assigned by an external
//! profile source before a command ever reaches the engine, and the engine
//! treats it as opaque and stable. The newtype wrappers keep a `RoomCode`
//! from ever being passed where a `PlayerId` is expected.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique, externally assigned identifier for a player.
///
/// `#[serde(transparent)]` makes this serialize as the bare string, so a
/// `PlayerId("p1")` is just `"p1"` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A short, human-typeable room identifier.
///
/// Codes are 6 characters drawn from an alphabet with the easily confused
/// glyphs (`0/O`, `1/I`) removed, so they survive being read out loud.
/// Generation lives in the engine; this is just the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomCode(pub String);

impl RoomCode {
    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoomCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The kind of game a room hosts (e.g. `"snake"`, `"checkers"`).
///
/// Opaque to the engine except for equality: matchmaking only pairs
/// requests with the same game type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameType(pub String);

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GameType {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Player profile
// ---------------------------------------------------------------------------

/// A player as resolved by the external identity/profile source.
///
/// This is what arrives with a `JoinRoom` command: who the player is and
/// what their prior skill rating was. Liveness (`connected`, `last_seen`)
/// is the engine's concern and is attached when the player is seated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Externally assigned, stable id.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Prior skill rating.
    pub rating: i32,
}

impl PlayerProfile {
    /// Creates a profile from parts.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, rating: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
        }
    }
}

// ---------------------------------------------------------------------------
// Moves
// ---------------------------------------------------------------------------

/// One submitted action within a room.
///
/// `sequence` is a strictly increasing per-room counter assigned by the
/// caller's turn order. The engine *checks* it against the expected value
/// (to reject replays and out-of-order deliveries) but never assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMove {
    /// Who moved.
    pub player_id: PlayerId,
    /// Opaque move payload; game-rule legality is a separate collaborator's
    /// problem.
    pub move_data: String,
    /// When the move was submitted.
    pub timestamp: DateTime<Utc>,
    /// Position in the room's move order, starting at 1.
    pub sequence: u64,
}

// ---------------------------------------------------------------------------
// Matchmaking
// ---------------------------------------------------------------------------

/// One player waiting to be paired.
///
/// Ephemeral: exists only while the player sits in the queue, and is
/// removed once matched or cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    /// The waiting player.
    pub player_id: PlayerId,
    /// Their current rating, used for the compatibility window.
    pub rating: i32,
    /// The game they want to play.
    pub game_type: GameType,
    /// When they entered the queue.
    pub timestamp: DateTime<Utc>,
}

// =========================================================================
// Tests
// =========================================================================
