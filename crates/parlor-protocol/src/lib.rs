//! Boundary types for Parlor.
//!
//! Everything the engine accepts from or hands back to a host crosses this
//! crate: identity newtypes, the resolved player profile, submitted moves,
//! matchmaking requests, and the inbound command shapes. The engine itself
//! speaks no wire protocol — these types define the *shape* of the boundary,
//! and hosts serialize them however their transport likes (all of them are
//! plain serde derives).
//!
//! # Key types
//!
//! - [`PlayerId`], [`RoomCode`], [`GameType`] — identity newtypes
//! - [`PlayerProfile`] — a player as resolved by the identity source
//! - [`GameMove`] — one submitted action with its sequence number
//! - [`MatchRequest`] — one entry in the matchmaking queue
//! - [`Command`] — the inbound operations a host can issue

mod command;
mod types;

pub use command::Command;
pub use types::{GameMove, GameType, MatchRequest, PlayerId, PlayerProfile, RoomCode};
