//! Room-code generation.

use parlor_protocol::RoomCode;
use rand::Rng;

/// Code alphabet: 32 characters, with `0/O` and `1/I` removed so codes
/// survive being read over voice chat or typed from a phone screen.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Code length. 32^6 ≈ 1.07 billion combinations; collision probability at
/// realistic room counts is negligible, and the host registry retries on
/// the rare hit anyway.
pub const CODE_LEN: usize = 6;

/// Generates a random room code.
///
/// This function is collision-oblivious: uniqueness against live rooms is
/// the host registry's job, since only it knows which codes are in use.
pub fn generate_room_code() -> RoomCode {
    let mut rng = rand::rng();
    let code: String = (0..CODE_LEN)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect();
    RoomCode(code)
}
