//! Session identifier correlating the deep link with the poll request

use rand::rngs::OsRng;
use rand::RngCore;
use uuid::{Builder, Uuid};

/// Generate a random UUID v4 string (lowercase, hyphenated)
pub fn generate_session_id() -> String {
    let mut bytes = [0u8; 16];
    OsRng.fill_bytes(&mut bytes);
    session_id_from_bytes(bytes).to_string()
}

/// Stamp version 4 and the RFC 4122 variant onto raw bytes
///
/// Byte 6 becomes `0x40 | (b & 0x0F)`, byte 8 becomes `0x80 | (b & 0x3F)`.
pub fn session_id_from_bytes(bytes: [u8; 16]) -> Uuid {
    Builder::from_random_bytes(bytes).into_uuid()
}
