//! Length options for the naming entry points.

use serde::{Deserialize, Serialize};

use crate::sanitize::HASH_HEX_LEN;

/// Default maximum output length, in codepoints.
pub const DEFAULT_MAX_LENGTH: usize = 255;

/// Default hash suffix length for filenames.
pub const DEFAULT_FILENAME_HASH_LENGTH: usize = 7;

/// Default hash suffix length for slugs.
pub const DEFAULT_SLUG_HASH_LENGTH: usize = 6;

/// Length limits applied when building a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameOptions {
    /// Upper bound on the output length, in codepoints.
    pub max_length: usize,

    /// Number of hex characters of the hash suffix (0 disables it).
    pub hash_length: usize,
}

impl NameOptions {
    pub const fn new(max_length: usize, hash_length: usize) -> Self {
        Self {
            max_length,
            hash_length,
        }
    }

    /// Defaults for [`crate::filename`]: 255 codepoints, 7-char hash.
    pub const fn filename() -> Self {
        Self::new(DEFAULT_MAX_LENGTH, DEFAULT_FILENAME_HASH_LENGTH)
    }

    /// Defaults for [`crate::slugify`]: 255 codepoints, 6-char hash.
    pub const fn slug() -> Self {
        Self::new(DEFAULT_MAX_LENGTH, DEFAULT_SLUG_HASH_LENGTH)
    }

    /// Hash length actually appended.
    ///
    /// Capped by the digest width and by `max_length`, so the hash alone
    /// never overflows the output.
    pub fn effective_hash_length(&self) -> usize {
        self.hash_length.min(HASH_HEX_LEN).min(self.max_length)
    }
}
