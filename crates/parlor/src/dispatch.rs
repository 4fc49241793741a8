//! Command dispatch: one entry point from a host's transport to the lobby.
//!
//! A host decodes whatever its wire format is into a
//! [`Command`], hands it to [`Lobby::dispatch`], and broadcasts the
//! returned [`Outcome`] (or reports the [`LobbyError`]). The per-variant
//! dispatch table keeps the transport layer free of any lobby knowledge
//! beyond these three types.

use parlor_engine::{DEFAULT_RATING_RANGE, GameHistory, Room};
use parlor_protocol::{Command, GameMove, MatchRequest};

use crate::{LobbyError, MatchQueue, Pairing, RoomRegistry};

/// The broadcastable result of a successful command.
///
/// Mirrors the engine boundary's outbound results: an updated room
/// snapshot, an accepted move, a pairing decision, or the terminal history
/// record.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The room after a lifecycle or presence transition.
    Room(Room),

    /// A validated, recorded move, ready to relay to the other players.
    MoveAccepted(GameMove),

    /// Two players paired; both entries have left the queue. The host
    /// follows up with `CreateRoom`/`JoinRoom` for the pair.
    Matched {
        request: MatchRequest,
        opponent: MatchRequest,
    },

    /// The requester is waiting at this 1-based queue position.
    Queued { position: usize },

    /// The withdrawn queue entry.
    MatchCancelled(MatchRequest),

    /// The game is over: final room snapshot plus the immutable record.
    Finished { room: Room, history: GameHistory },
}

/// Owns a [`RoomRegistry`] and a [`MatchQueue`] and routes commands to
/// them.
///
/// Drive one `Lobby` from one thread of control; it has no interior
/// locking on purpose (the engine's design lets the host pick the
/// concurrency model, and a `Lobby` behind an actor or mutex *is* that
/// model).
#[derive(Debug)]
pub struct Lobby {
    registry: RoomRegistry,
    queue: MatchQueue,
    rating_range: i32,
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new()
    }
}

impl Lobby {
    /// Creates a lobby with the default matchmaking window.
    pub fn new() -> Self {
        Self {
            registry: RoomRegistry::new(),
            queue: MatchQueue::new(),
            rating_range: DEFAULT_RATING_RANGE,
        }
    }

    /// Creates a lobby with a custom matchmaking rating window.
    pub fn with_rating_range(rating_range: i32) -> Self {
        Self {
            rating_range,
            ..Self::new()
        }
    }

    /// Executes one inbound command.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, LobbyError> {
        match command {
            Command::CreateRoom {
                host_id,
                host_name,
                game_type,
                max_players,
            } => self
                .registry
                .create_room(host_id, host_name, game_type, max_players)
                .map(Outcome::Room),

            Command::JoinRoom { room_code, player } => self
                .registry
                .join_room(&room_code, player)
                .map(Outcome::Room),

            Command::LeaveRoom {
                room_code,
                player_id,
            } => self
                .registry
                .leave_room(&room_code, &player_id)
                .map(Outcome::Room),

            Command::StartGame { room_code } => {
                self.registry.start_game(&room_code).map(Outcome::Room)
            }

            Command::SubmitMove {
                room_code,
                game_move,
            } => self
                .registry
                .submit_move(&room_code, game_move)
                .map(Outcome::MoveAccepted),

            Command::Disconnect {
                room_code,
                player_id,
            } => self
                .registry
                .disconnect(&room_code, &player_id)
                .map(Outcome::Room),

            Command::Reconnect {
                room_code,
                player_id,
            } => self
                .registry
                .reconnect(&room_code, &player_id)
                .map(Outcome::Room),

            Command::FinishGame { room_code, winner } => self
                .registry
                .finish_game(&room_code, winner)
                .map(|(room, history)| Outcome::Finished { room, history }),

            Command::RequestMatch { request } => {
                let requester = request.clone();
                self.queue
                    .request_match(request, self.rating_range)
                    .map(|pairing| match pairing {
                        Pairing::Matched { opponent } => Outcome::Matched {
                            request: requester,
                            opponent,
                        },
                        Pairing::Queued { position } => Outcome::Queued { position },
                    })
            }

            Command::CancelMatch { player_id } => {
                self.queue.cancel(&player_id).map(Outcome::MatchCancelled)
            }
        }
    }

    /// Read access to the room registry.
    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    /// Mutable access for hosts that drive the registry directly.
    pub fn registry_mut(&mut self) -> &mut RoomRegistry {
        &mut self.registry
    }

    /// Read access to the matchmaking queue.
    pub fn queue(&self) -> &MatchQueue {
        &self.queue
    }
}
