//! Public naming entry points.
//!
//! Provides:
//! - Filesystem-safe filenames with preserved extensions
//! - URL/DNS-safe slugs
//! - The options and kind selectors shared by both

pub mod filename;
pub mod kind;
pub mod options;
pub mod slug;

pub use filename::{filename, filename_with_options};
pub use kind::NameKind;
pub use options::{
    NameOptions, DEFAULT_FILENAME_HASH_LENGTH, DEFAULT_MAX_LENGTH, DEFAULT_SLUG_HASH_LENGTH,
};
pub use slug::{slugify, slugify_with_options};

/// Join the non-empty members of `[core, hash]` with a single dash.
pub(crate) fn join_with_hash(core: &str, hash: &str) -> String {
    [core, hash]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
