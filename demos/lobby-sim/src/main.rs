//! A scripted run through the whole lobby: two players request a match,
//! get paired, play a short game of snake with a mid-game disconnect, and
//! finish with a rating update and a printed history record.
//!
//! Run with logging:
//!
//! ```text
//! RUST_LOG=debug cargo run -p lobby-sim
//! ```

use chrono::Utc;
use parlor::prelude::*;
use parlor_engine::{DEFAULT_K_FACTOR, update_ratings};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut lobby = Lobby::new();

    // --- Matchmaking: ada waits, grace pairs with her ---
    let ada = MatchRequest {
        player_id: PlayerId::from("ada"),
        rating: 1000,
        game_type: GameType::from("snake"),
        timestamp: Utc::now(),
    };
    let grace = MatchRequest {
        player_id: PlayerId::from("grace"),
        rating: 1080,
        game_type: GameType::from("snake"),
        timestamp: Utc::now(),
    };

    let outcome = lobby
        .dispatch(Command::RequestMatch { request: ada })
        .expect("first request queues");
    tracing::info!(?outcome, "ada requested a match");

    let Outcome::Matched { request, opponent } = lobby
        .dispatch(Command::RequestMatch { request: grace })
        .expect("second request pairs")
    else {
        panic!("grace should have been paired with ada");
    };
    tracing::info!(
        requester = %request.player_id,
        opponent = %opponent.player_id,
        "paired"
    );

    // --- Room formation: the matched pair gets a room ---
    let Outcome::Room(room) = lobby
        .dispatch(Command::CreateRoom {
            host_id: opponent.player_id.clone(),
            host_name: "Ada".into(),
            game_type: opponent.game_type.clone(),
            max_players: None,
        })
        .expect("create always succeeds")
    else {
        unreachable!("create returns a room");
    };
    let code = room.code.clone();
    println!("room code: {code}");

    lobby
        .dispatch(Command::JoinRoom {
            room_code: code.clone(),
            player: PlayerProfile::new("grace", "Grace", request.rating),
        })
        .expect("seat is free");
    lobby
        .dispatch(Command::StartGame {
            room_code: code.clone(),
        })
        .expect("two players seated");

    // --- Play: alternating moves, one wifi drop, one replayed packet ---
    for (seq, (player, step)) in [("ada", "up"), ("grace", "left"), ("ada", "up")]
        .into_iter()
        .enumerate()
    {
        lobby
            .dispatch(Command::SubmitMove {
                room_code: code.clone(),
                game_move: GameMove {
                    player_id: PlayerId::from(player),
                    move_data: step.into(),
                    timestamp: Utc::now(),
                    sequence: seq as u64 + 1,
                },
            })
            .expect("in-order move is accepted");
    }

    lobby
        .dispatch(Command::Disconnect {
            room_code: code.clone(),
            player_id: PlayerId::from("grace"),
        })
        .expect("room exists");
    lobby
        .dispatch(Command::Reconnect {
            room_code: code.clone(),
            player_id: PlayerId::from("grace"),
        })
        .expect("grace kept her seat");

    // A replayed delivery of move 2 bounces off the sequence check.
    let replay = lobby.dispatch(Command::SubmitMove {
        room_code: code.clone(),
        game_move: GameMove {
            player_id: PlayerId::from("grace"),
            move_data: "left".into(),
            timestamp: Utc::now(),
            sequence: 2,
        },
    });
    tracing::info!(result = %replay.unwrap_err(), "replayed packet rejected");

    // --- Finish: history record and rating update ---
    let Outcome::Finished { room, history } = lobby
        .dispatch(Command::FinishGame {
            room_code: code,
            winner: Some(PlayerId::from("ada")),
        })
        .expect("room exists")
    else {
        unreachable!("finish returns the history");
    };

    let winner = room.player(&PlayerId::from("ada")).expect("ada is seated");
    let loser = room.player(&PlayerId::from("grace")).expect("grace is seated");
    let update = update_ratings(winner.rating, loser.rating, DEFAULT_K_FACTOR);
    println!(
        "ratings: {} {} -> {}, {} {} -> {}",
        winner.name, winner.rating, update.winner, loser.name, loser.rating, update.loser
    );

    let json = serde_json::to_string_pretty(&history).expect("history serializes");
    println!("{json}");
}
