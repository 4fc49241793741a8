//! The pure state-transition core of Parlor.
//!
//! Every operation here is a total function from explicit inputs to an
//! output value: it takes the current [`Room`] (and, for matchmaking, a
//! queue slice), and returns a new value or a typed [`Reject`]. Nothing is
//! mutated in place, nothing blocks, nothing reads a clock or performs I/O
//! — operations that need the current time take it as an argument. That is
//! what lets a host run this core under any concurrency model it likes (an
//! actor per room, a single-threaded event loop, a mutex per code) without
//! the engine imposing one.
//!
//! What the engine does **not** do, on purpose:
//!
//! - It never serializes operations against a room. Two concurrent joins
//!   applied to the same snapshot can both succeed; hosts must apply
//!   operations for one room in order (see `parlor`'s registry).
//! - [`find_match`] never dequeues. The host must test-and-remove both
//!   matched entries under its own queue discipline.
//! - No timers. `last_seen` is data; forfeit-on-timeout is host policy.
//!
//! # Key types
//!
//! - [`Room`], [`Player`], [`RoomStatus`] — the shared state and its
//!   lifecycle machine
//! - [`Reject`] — precondition rejections (never panics, never exceptions)
//! - [`GameHistory`] — the immutable record of a finished match

mod code;
mod error;
mod history;
mod lifecycle;
mod matchmaker;
mod moves;
mod presence;
mod rating;
mod room;

pub use code::{CODE_ALPHABET, CODE_LEN, generate_room_code};
pub use error::Reject;
pub use history::{GameHistory, create_history};
pub use lifecycle::{
    DEFAULT_MAX_PLAYERS, DEFAULT_RATING, MIN_PLAYERS_TO_START, create_room, finish_game,
    join_room, leave_room, start_game,
};
pub use matchmaker::{DEFAULT_RATING_RANGE, find_match};
pub use moves::validate_move;
pub use presence::{disconnect_player, reconnect_player};
pub use rating::{DEFAULT_K_FACTOR, RatingUpdate, expected_score, update_ratings};
pub use room::{Player, Room, RoomStatus};
