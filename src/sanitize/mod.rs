//! Sanitization building blocks.
//!
//! Provides:
//! - Unicode to ASCII transliteration
//! - Dash-delimited normalization
//! - Extension splitting
//! - Length budgeting and edge trimming
//! - Content-derived hash suffixes
//!
//! The public entry points in [`crate::names`] compose these; they are
//! exported here for callers that need a single step on its own.

pub mod budget;
pub mod extension;
pub mod hash;
pub mod normalize;
pub mod transliterate;

pub use budget::{char_len, hash_reserve, trim_non_alphanumeric_ends, truncate_to_length};
pub use extension::{fit_extension, split_extension};
pub use hash::{hash_suffix, HASH_HEX_LEN};
pub use normalize::sanitize;
pub use transliterate::{decode_discarding_invalid, transliterate};
