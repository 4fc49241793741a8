//! Room lifecycle operations.
//!
//! All of these are pure: they take the current room by reference and
//! return a fresh value, leaving the input untouched. Guards are encoded
//! as explicit [`Reject`] values rather than panics so a caller can retry
//! against a newer snapshot or surface a user-facing reason without
//! unwinding anything.

use chrono::{DateTime, Utc};
use parlor_protocol::{GameType, PlayerId, PlayerProfile};

use crate::{Player, Reject, Room, RoomStatus, generate_room_code};

/// Seat capacity when the creator doesn't ask for one.
pub const DEFAULT_MAX_PLAYERS: usize = 2;

/// Rating assigned to a host seated at creation.
pub const DEFAULT_RATING: i32 = 1000;

/// Minimum seated players before a game may start.
pub const MIN_PLAYERS_TO_START: usize = 2;

/// Creates a room with the host already seated.
///
/// The code is freshly generated and unique with negligible exceptions;
/// registries that track live rooms retry on collision. Always succeeds.
pub fn create_room(
    host_id: PlayerId,
    host_name: impl Into<String>,
    game_type: GameType,
    max_players: usize,
    now: DateTime<Utc>,
) -> Room {
    let host = Player::seated(host_id.clone(), host_name, DEFAULT_RATING, now);
    Room {
        code: generate_room_code(),
        host: host_id,
        players: vec![host],
        max_players,
        status: RoomStatus::Waiting,
        game_type,
        created_at: now,
    }
}

/// Seats a player in a waiting room.
///
/// Rejects when the room is past `Waiting`, when every seat is taken, or
/// when the player is already seated. On success the player joins the end
/// of the seat list, connected, with a fresh `last_seen`.
pub fn join_room(room: &Room, player: PlayerProfile, now: DateTime<Utc>) -> Result<Room, Reject> {
    if !room.status.is_joinable() {
        return Err(Reject::NotJoinable(room.code.clone(), room.status));
    }
    if room.is_full() {
        return Err(Reject::RoomFull(room.code.clone(), room.max_players));
    }
    if room.contains(&player.id) {
        return Err(Reject::AlreadySeated(player.id, room.code.clone()));
    }

    let mut next = room.clone();
    next.players
        .push(Player::seated(player.id, player.name, player.rating, now));
    Ok(next)
}

/// Removes a player, regardless of room status.
///
/// A leave during play is legal and changes nothing but the seat list:
/// no forfeit, no status transition. An absent id leaves the room
/// unchanged. The room is not closed even if it empties; cleanup policy
/// belongs to the caller.
pub fn leave_room(room: &Room, player_id: &PlayerId) -> Room {
    let mut next = room.clone();
    next.players.retain(|p| &p.id != player_id);
    next
}

/// Transitions a waiting room into play.
///
/// Rejects unless the room is `Waiting` and seats at least
/// [`MIN_PLAYERS_TO_START`] players.
pub fn start_game(room: &Room) -> Result<Room, Reject> {
    if room.status != RoomStatus::Waiting {
        return Err(Reject::NotStartable(room.code.clone(), room.status));
    }
    if room.players.len() < MIN_PLAYERS_TO_START {
        return Err(Reject::NotEnoughPlayers {
            code: room.code.clone(),
            min: MIN_PLAYERS_TO_START,
            have: room.players.len(),
        });
    }

    let mut next = room.clone();
    next.status = RoomStatus::Playing;
    Ok(next)
}

/// Transitions a room to `Finished`, unconditionally.
///
/// Callers are responsible for invoking this exactly once, when a terminal
/// game condition is reached. `Finished` is terminal; the room is treated
/// as immutable afterward.
pub fn finish_game(room: &Room) -> Room {
    let mut next = room.clone();
    next.status = RoomStatus::Finished;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use parlor_protocol::PlayerProfile;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn profile(id: &str, rating: i32) -> PlayerProfile {
        PlayerProfile::new(id, format!("player {id}"), rating)
    }

    fn waiting_room(max_players: usize) -> Room {
        create_room(
            PlayerId::from("host"),
            "Host",
            GameType::from("snake"),
            max_players,
            now(),
        )
    }

    // =====================================================================
    // create_room
    // =====================================================================

    #[test]
    fn test_create_room_seats_host_with_default_rating() {
        let room = waiting_room(2);

        assert_eq!(room.status, RoomStatus::Waiting);
        assert_eq!(room.host, PlayerId::from("host"));
        assert_eq!(room.players.len(), 1);
        assert_eq!(room.players[0].rating, DEFAULT_RATING);
        assert!(room.players[0].connected);
        assert_eq!(room.created_at, now());
    }

    #[test]
    fn test_create_room_generates_well_formed_code() {
        let room = waiting_room(2);
        assert_eq!(room.code.as_str().len(), crate::CODE_LEN);
    }

    // =====================================================================
    // join_room
    // =====================================================================

    #[test]
    fn test_join_room_appends_connected_player() {
        let room = waiting_room(2);

        let next = join_room(&room, profile("p2", 1100), now()).unwrap();

        assert_eq!(next.players.len(), 2);
        let seated = next.player(&PlayerId::from("p2")).unwrap();
        assert!(seated.connected);
        assert_eq!(seated.rating, 1100);
        assert_eq!(seated.last_seen, now());
        // The input snapshot is untouched.
        assert_eq!(room.players.len(), 1);
    }

    #[test]
    fn test_join_room_full_returns_reject() {
        let room = waiting_room(2);
        let room = join_room(&room, profile("p2", 1000), now()).unwrap();

        let result = join_room(&room, profile("p3", 1000), now());

        assert!(matches!(result, Err(Reject::RoomFull(_, 2))));
    }

    #[test]
    fn test_join_room_duplicate_player_returns_reject() {
        let room = waiting_room(4);
        let room = join_room(&room, profile("p2", 1000), now()).unwrap();

        let result = join_room(&room, profile("p2", 1000), now());

        assert!(matches!(result, Err(Reject::AlreadySeated(p, _)) if p == PlayerId::from("p2")));
    }

    #[test]
    fn test_join_room_after_start_returns_reject() {
        let room = waiting_room(4);
        let room = join_room(&room, profile("p2", 1000), now()).unwrap();
        let room = start_game(&room).unwrap();

        let result = join_room(&room, profile("p3", 1000), now());

        assert!(matches!(
            result,
            Err(Reject::NotJoinable(_, RoomStatus::Playing))
        ));
    }

    #[test]
    fn test_join_room_capacity_never_exceeded() {
        // Capacity invariant: whatever sequence of joins is attempted, the
        // seat list never exceeds max_players.
        let mut room = waiting_room(3);
        for i in 0..10 {
            if let Ok(next) = join_room(&room, profile(&format!("p{i}"), 1000), now()) {
                room = next;
            }
            assert!(room.players.len() <= room.max_players);
        }
        assert_eq!(room.players.len(), 3);
    }

    // =====================================================================
    // leave_room
    // =====================================================================

    #[test]
    fn test_leave_room_removes_player() {
        let room = waiting_room(4);
        let room = join_room(&room, profile("p2", 1000), now()).unwrap();

        let next = leave_room(&room, &PlayerId::from("p2"));

        assert!(!next.contains(&PlayerId::from("p2")));
        assert_eq!(next.players.len(), 1);
    }

    #[test]
    fn test_leave_room_unknown_player_is_noop() {
        let room = waiting_room(4);

        let next = leave_room(&room, &PlayerId::from("ghost"));

        assert_eq!(next, room);
    }

    #[test]
    fn test_leave_room_during_play_keeps_status() {
        let room = waiting_room(4);
        let room = join_room(&room, profile("p2", 1000), now()).unwrap();
        let room = start_game(&room).unwrap();

        let next = leave_room(&room, &PlayerId::from("p2"));

        // No auto-forfeit: the game keeps playing with one seat vacated.
        assert_eq!(next.status, RoomStatus::Playing);
        assert_eq!(next.players.len(), 1);
    }

    #[test]
    fn test_leave_room_empty_room_stays_open() {
        let room = waiting_room(2);

        let next = leave_room(&room, &PlayerId::from("host"));

        assert!(next.players.is_empty());
        assert_eq!(next.status, RoomStatus::Waiting);
    }

    #[test]
    fn test_join_leave_sequences_never_duplicate_ids() {
        // No-duplicate invariant across an arbitrary join/leave interleave.
        let mut room = waiting_room(4);
        let p2 = PlayerId::from("p2");
        for _ in 0..3 {
            if let Ok(next) = join_room(&room, profile("p2", 1000), now()) {
                room = next;
            }
            let seated = room.players.iter().filter(|p| p.id == p2).count();
            assert!(seated <= 1);
            room = leave_room(&room, &p2);
        }
    }

    // =====================================================================
    // start_game / finish_game
    // =====================================================================

    #[test]
    fn test_start_game_requires_two_players() {
        let room = waiting_room(4);

        let result = start_game(&room);

        assert!(matches!(
            result,
            Err(Reject::NotEnoughPlayers { min: 2, have: 1, .. })
        ));
    }

    #[test]
    fn test_start_game_transitions_to_playing() {
        let room = waiting_room(4);
        let room = join_room(&room, profile("p2", 1000), now()).unwrap();

        let next = start_game(&room).unwrap();

        assert_eq!(next.status, RoomStatus::Playing);
    }

    #[test]
    fn test_start_game_twice_returns_reject() {
        let room = waiting_room(4);
        let room = join_room(&room, profile("p2", 1000), now()).unwrap();
        let room = start_game(&room).unwrap();

        let result = start_game(&room);

        assert!(matches!(
            result,
            Err(Reject::NotStartable(_, RoomStatus::Playing))
        ));
    }

    #[test]
    fn test_finish_game_is_terminal() {
        let room = waiting_room(4);
        let room = join_room(&room, profile("p2", 1000), now()).unwrap();
        let room = start_game(&room).unwrap();

        let done = finish_game(&room);

        assert_eq!(done.status, RoomStatus::Finished);
        // No operation leaves Finished.
        assert!(matches!(start_game(&done), Err(Reject::NotStartable(..))));
        assert!(matches!(
            join_room(&done, profile("p3", 1000), now()),
            Err(Reject::NotJoinable(..))
        ));
    }

    #[test]
    fn test_status_only_moves_forward() {
        // Status monotonicity: walk a full lifecycle and check each step
        // only ever advances.
        let room = waiting_room(4);
        let room = join_room(&room, profile("p2", 1000), now()).unwrap();
        assert_eq!(room.status, RoomStatus::Waiting);

        let playing = start_game(&room).unwrap();
        assert!(room.status.can_transition_to(playing.status));

        let finished = finish_game(&playing);
        assert!(playing.status.can_transition_to(finished.status));
        assert!(finished.status.is_terminal());
    }
}
