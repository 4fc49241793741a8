//! Presence transitions: disconnect and reconnect.
//!
//! Deliberately independent of the room status machine. A network drop is
//! not a leave — the seat survives, the game keeps its status, and only the
//! liveness flags change. Whatever a host wants to do about a player who
//! stays gone (forfeit, pause, grace timer) it builds on top of `last_seen`;
//! nothing here runs a clock.

use chrono::{DateTime, Utc};
use parlor_protocol::PlayerId;

use crate::{Reject, Room};

/// Marks a seated player as disconnected.
///
/// The player keeps their seat and `last_seen` is left as-is — it records
/// the last time they were known alive. An unknown id is a silent no-op;
/// a drop notification for a player who already left carries no information
/// worth rejecting over.
pub fn disconnect_player(room: &Room, player_id: &PlayerId) -> Room {
    let mut next = room.clone();
    if let Some(p) = next.players.iter_mut().find(|p| &p.id == player_id) {
        p.connected = false;
    }
    next
}

/// Restores a seated player's connection and refreshes `last_seen`.
///
/// Unlike disconnect, an unknown id is rejected: reconnecting someone who
/// is not seated would fabricate presence for a phantom player.
pub fn reconnect_player(
    room: &Room,
    player_id: &PlayerId,
    now: DateTime<Utc>,
) -> Result<Room, Reject> {
    if !room.contains(player_id) {
        return Err(Reject::UnknownPlayer(player_id.clone(), room.code.clone()));
    }

    let mut next = room.clone();
    let p = next
        .players
        .iter_mut()
        .find(|p| &p.id == player_id)
        .expect("presence checked above");
    p.connected = true;
    p.last_seen = now;
    Ok(next)
}
