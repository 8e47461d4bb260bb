//! Content-derived hash suffixes.

use sha2::{Digest, Sha256};

/// Number of hex characters in a SHA-256 digest.
pub const HASH_HEX_LEN: usize = 64;

/// Hex SHA-256 of the original input, truncated to `hash_length` characters.
///
/// The digest is taken over the untouched input bytes, so inputs that
/// normalize identically (`café` and `cafe`) still get different suffixes.
/// A `hash_length` of 0 disables the suffix; values above
/// [`HASH_HEX_LEN`] return the full digest.
pub fn hash_suffix(input: &str, hash_length: usize) -> String {
    if hash_length == 0 {
        return String::new();
    }

    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(hash_length.min(HASH_HEX_LEN));
    hex
}
