//! Random hexadecimal identifiers
//!
//! Ephemeral timers need a name nobody else will pick. Drawing 16 bytes
//! from a CSPRNG gives 128 bits, which makes collisions negligible.

use rand::Rng;

/// Generate a lowercase hex identifier from `bytes` random bytes
///
/// The output is always `2 * bytes` characters long.
///
/// # Examples
///
/// ```
/// use lapwatch_common::utils::random_hex_id;
///
/// let id = random_hex_id(16);
/// assert_eq!(id.len(), 32);
/// assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn random_hex_id(bytes: usize) -> String {
    let mut rng = rand::thread_rng();
    let random_bytes: Vec<u8> = (0..bytes).map(|_| rng.gen()).collect();
    hex::encode(random_bytes)
}
