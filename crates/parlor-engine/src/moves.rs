//! Structural move validation.

use parlor_protocol::GameMove;

/// Checks a submitted move against the expected sequence number.
///
/// Returns `false` when the sequence doesn't match (a replayed or
/// out-of-order delivery), or when the player id or move payload is empty.
/// This is a well-formedness and ordering check only — whether the move is
/// *legal* in the game being played is a game-specific collaborator's
/// decision, made after this one.
///
/// The boolean return is deliberate: the host decides whether a failure is
/// fatal to the room or just a packet to drop.
pub fn validate_move(game_move: &GameMove, expected_sequence: u64) -> bool {
    if game_move.sequence != expected_sequence {
        return false;
    }
    if game_move.player_id.as_str().is_empty() || game_move.move_data.is_empty() {
        return false;
    }
    true
}
