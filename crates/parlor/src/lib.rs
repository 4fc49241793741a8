//! # Parlor
//!
//! Host-side lobby layer over the pure `parlor-engine` core.
//!
//! The engine is a set of total functions over room snapshots; this crate
//! is "the caller" those functions keep referring to. It owns the live
//! room map and the waiting queue, supplies wall-clock time, enforces the
//! obligations the engine deliberately leaves to hosts (one open room per
//! player, unique live codes, atomic queue pairing, a monotonically
//! advancing move sequence), and logs every transition.
//!
//! One instance of [`Lobby`] expects to be driven from a single thread of
//! control — an actor, an event loop, or behind a mutex. It contains no
//! locks of its own: per-room serialization is achieved by *being* the
//! single place operations flow through, which is the concurrency stance
//! the engine's design asks for.
//!
//! # Key types
//!
//! - [`Lobby`] — dispatches inbound [`Command`]s, owns registry + queue
//! - [`RoomRegistry`] — live rooms, seats index, move logs
//! - [`MatchQueue`] — waiting players, atomic pairing
//! - [`Outcome`] — what a host broadcasts after a successful command
//! - [`LobbyError`] — every way a command can be refused
//!
//! [`Command`]: parlor_protocol::Command

mod dispatch;
mod error;
mod queue;
mod registry;

pub use dispatch::{Lobby, Outcome};
pub use error::LobbyError;
pub use queue::{MatchQueue, Pairing};
pub use registry::RoomRegistry;

/// Convenience re-exports for hosts that want a single `use`.
pub mod prelude {
    pub use crate::{Lobby, LobbyError, MatchQueue, Outcome, Pairing, RoomRegistry};
    pub use parlor_engine::{GameHistory, Player, Reject, Room, RoomStatus};
    pub use parlor_protocol::{
        Command, GameMove, GameType, MatchRequest, PlayerId, PlayerProfile, RoomCode,
    };
}
