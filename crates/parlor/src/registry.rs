//! Room registry: owns live room snapshots and routes operations to them.
//!
//! The engine's operations are pure functions over a single room; the
//! registry is the host-side structure that makes them safe to use in a
//! running service. It keeps the authoritative snapshot per room code,
//! applies each operation against the latest snapshot, and stores the
//! result — so as long as one registry instance is driven from one thread
//! of control, operations against a given room are serialized and the
//! lost-update race (two joins both seeing the last free seat) cannot
//! happen.
//!
//! The registry also carries the two pieces of bookkeeping the engine
//! refuses to own: which player sits in which open room, and each room's
//! validated move log (whose length defines the next expected sequence).

use std::collections::HashMap;

use chrono::Utc;
use parlor_engine as engine;
use parlor_engine::{GameHistory, Room, RoomStatus};
use parlor_protocol::{GameMove, GameType, PlayerId, PlayerProfile, RoomCode};

use crate::LobbyError;

/// Live rooms, keyed by code, plus the per-player seat index and per-room
/// move logs.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    /// Authoritative snapshot per live room.
    rooms: HashMap<RoomCode, Room>,

    /// Maps each seated player to their open room.
    /// A player sits in at most ONE open room at a time (key invariant —
    /// the engine spec delegates this to callers, and the registry is the
    /// caller).
    seats: HashMap<PlayerId, RoomCode>,

    /// Validated moves per room, in acceptance order. The next expected
    /// sequence for a room is `log.len() + 1`.
    move_logs: HashMap<RoomCode, Vec<GameMove>>,
}

impl RoomRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a room with the host seated, guaranteeing the code is
    /// unique among live rooms.
    ///
    /// The generator draws from a 32^6 space, so the retry loop almost
    /// never iterates; it exists because "almost never" is not "never"
    /// and only the registry knows which codes are in use.
    pub fn create_room(
        &mut self,
        host_id: PlayerId,
        host_name: impl Into<String>,
        game_type: GameType,
        max_players: Option<usize>,
    ) -> Result<Room, LobbyError> {
        if let Some(existing) = self.seats.get(&host_id) {
            return Err(LobbyError::PlayerBusy(host_id, existing.clone()));
        }

        let max_players = max_players.unwrap_or(engine::DEFAULT_MAX_PLAYERS);
        let host_name = host_name.into();
        let room = loop {
            let candidate = engine::create_room(
                host_id.clone(),
                host_name.clone(),
                game_type.clone(),
                max_players,
                Utc::now(),
            );
            if !self.rooms.contains_key(&candidate.code) {
                break candidate;
            }
        };

        tracing::info!(code = %room.code, host = %room.host, game = %room.game_type, "room created");
        self.seats.insert(host_id, room.code.clone());
        self.move_logs.insert(room.code.clone(), Vec::new());
        self.rooms.insert(room.code.clone(), room.clone());
        Ok(room)
    }

    /// Seats a player in the room with this code.
    pub fn join_room(
        &mut self,
        code: &RoomCode,
        player: PlayerProfile,
    ) -> Result<Room, LobbyError> {
        if let Some(existing) = self.seats.get(&player.id) {
            if existing != code {
                return Err(LobbyError::PlayerBusy(player.id, existing.clone()));
            }
            // Same room: fall through and let the engine report the
            // duplicate seat.
        }

        let room = self.get(code)?;
        let player_id = player.id.clone();
        let next = engine::join_room(room, player, Utc::now())?;

        tracing::info!(%code, player = %player_id, players = next.players.len(), "player joined");
        self.seats.insert(player_id, code.clone());
        Ok(self.store(next))
    }

    /// Removes a player from the room. Legal in any status; a leave during
    /// play vacates the seat and nothing else.
    pub fn leave_room(
        &mut self,
        code: &RoomCode,
        player_id: &PlayerId,
    ) -> Result<Room, LobbyError> {
        let room = self.get(code)?;
        if room.status == RoomStatus::Playing && room.contains(player_id) {
            tracing::debug!(%code, player = %player_id, "seat vacated mid-game");
        }
        let next = engine::leave_room(room, player_id);

        tracing::info!(%code, player = %player_id, players = next.players.len(), "player left");
        if self.seats.get(player_id) == Some(code) {
            self.seats.remove(player_id);
        }
        Ok(self.store(next))
    }

    /// Begins play in the room with this code.
    pub fn start_game(&mut self, code: &RoomCode) -> Result<Room, LobbyError> {
        let room = self.get(code)?;
        let next = engine::start_game(room)?;

        tracing::info!(%code, players = next.players.len(), "game started");
        Ok(self.store(next))
    }

    /// Marks a seated player as disconnected. Their seat survives.
    pub fn disconnect(
        &mut self,
        code: &RoomCode,
        player_id: &PlayerId,
    ) -> Result<Room, LobbyError> {
        let room = self.get(code)?;
        let next = engine::disconnect_player(room, player_id);

        tracing::debug!(%code, player = %player_id, "player disconnected");
        Ok(self.store(next))
    }

    /// Restores a seated player's connection.
    pub fn reconnect(
        &mut self,
        code: &RoomCode,
        player_id: &PlayerId,
    ) -> Result<Room, LobbyError> {
        let room = self.get(code)?;
        let next = engine::reconnect_player(room, player_id, Utc::now())?;

        tracing::debug!(%code, player = %player_id, "player reconnected");
        Ok(self.store(next))
    }

    /// Validates a move against the room's expected sequence and records
    /// it.
    ///
    /// The expected sequence is one past the number of moves already
    /// recorded, so accepted moves advance it by exactly one and a replayed
    /// or reordered delivery can never slip in. This registry treats a
    /// failed validation as a rejected command; a host that would rather
    /// silently drop the packet can catch [`LobbyError::MoveRejected`] and
    /// do so.
    pub fn submit_move(
        &mut self,
        code: &RoomCode,
        game_move: GameMove,
    ) -> Result<GameMove, LobbyError> {
        let room = self.get(code)?;
        if room.status != RoomStatus::Playing {
            return Err(LobbyError::NotPlaying(code.clone(), room.status));
        }

        let log = self
            .move_logs
            .get_mut(code)
            .expect("move log exists for every live room");
        let expected = log.len() as u64 + 1;
        if !engine::validate_move(&game_move, expected) {
            tracing::warn!(
                %code,
                player = %game_move.player_id,
                got = game_move.sequence,
                expected,
                "move rejected"
            );
            return Err(LobbyError::MoveRejected {
                code: code.clone(),
                got: game_move.sequence,
                expected,
            });
        }

        tracing::debug!(%code, player = %game_move.player_id, sequence = game_move.sequence, "move recorded");
        log.push(game_move.clone());
        Ok(game_move)
    }

    /// Finishes the game and assembles the immutable history record.
    ///
    /// The finished room stays in the registry (readable, immutable) until
    /// [`remove_room`](Self::remove_room); its players' seats are released
    /// immediately so they can join or create other rooms.
    pub fn finish_game(
        &mut self,
        code: &RoomCode,
        winner: Option<PlayerId>,
    ) -> Result<(Room, GameHistory), LobbyError> {
        let room = self.get(code)?;
        let finished = engine::finish_game(room);
        let log = self.move_logs.remove(code).unwrap_or_default();
        let history = engine::create_history(&finished, &log, winner, Utc::now());

        tracing::info!(
            %code,
            winner = history.winner.as_ref().map(|w| w.as_str()).unwrap_or("none"),
            moves = history.moves.len(),
            "game finished"
        );
        self.seats.retain(|_, seat| seat != code);
        let finished = self.store(finished);
        Ok((finished, history))
    }

    /// Drops a room (any status) and releases everything tied to it.
    pub fn remove_room(&mut self, code: &RoomCode) -> Result<Room, LobbyError> {
        let room = self
            .rooms
            .remove(code)
            .ok_or_else(|| LobbyError::RoomNotFound(code.clone()))?;
        self.seats.retain(|_, seat| seat != code);
        self.move_logs.remove(code);
        tracing::info!(%code, "room removed");
        Ok(room)
    }

    /// Looks up a live room by code.
    pub fn room(&self, code: &RoomCode) -> Option<&Room> {
        self.rooms.get(code)
    }

    /// The room a player is currently seated in, if any.
    pub fn seat_of(&self, player_id: &PlayerId) -> Option<&RoomCode> {
        self.seats.get(player_id)
    }

    /// The recorded move log for a room.
    pub fn moves(&self, code: &RoomCode) -> Option<&[GameMove]> {
        self.move_logs.get(code).map(Vec::as_slice)
    }

    /// Number of live rooms (including finished ones not yet removed).
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns `true` if no rooms are live.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Codes of all live rooms.
    pub fn codes(&self) -> Vec<RoomCode> {
        self.rooms.keys().cloned().collect()
    }

    fn get(&self, code: &RoomCode) -> Result<&Room, LobbyError> {
        self.rooms
            .get(code)
            .ok_or_else(|| LobbyError::RoomNotFound(code.clone()))
    }

    /// Stores an updated snapshot and returns a copy for broadcasting.
    fn store(&mut self, room: Room) -> Room {
        self.rooms.insert(room.code.clone(), room.clone());
        room
    }
}
