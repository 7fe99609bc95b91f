//! Short identifier generation.
//!
//! Identifiers are random, URL-safe, and long enough that generation-time
//! collisions are negligible; callers may still layer a defensive existence
//! check on top.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
const ID_LENGTH_BYTES: usize = 9;

/// Generates a cryptographically secure random short identifier.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character identifier.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
