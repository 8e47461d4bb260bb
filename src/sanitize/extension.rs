//! Extension splitting.

use std::sync::LazyLock;

use regex::Regex;

use crate::sanitize::budget::char_len;

/// A non-greedy base followed by a greedy chain of `.alnum` segments.
static EXTENSION_CHAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.*?)((?:\.[A-Za-z0-9]+)*)$").unwrap());

/// Split a filename into its base and trailing extension chain.
///
/// The extension is zero or more `.segment` groups of ASCII alphanumerics
/// anchored at the end, so `archive.tar.gz` splits into `archive` and
/// `.tar.gz`. Neither part is case-normalized here.
pub fn split_extension(name: &str) -> (&str, &str) {
    match EXTENSION_CHAIN.captures(name) {
        Some(caps) => {
            let base = caps.get(1).map_or("", |m| m.as_str());
            let extension = caps.get(2).map_or("", |m| m.as_str());
            (base, extension)
        }
        None => (name, ""),
    }
}

/// Shorten an extension chain until it fits in `room` codepoints.
///
/// Leading segments are dropped first (`.tar.gz` -> `.gz`). Returns an empty
/// string when not even the last segment fits.
pub fn fit_extension(extension: &str, room: usize) -> &str {
    if char_len(extension) <= room {
        return extension;
    }

    extension
        .match_indices('.')
        .skip(1)
        .map(|(idx, _)| &extension[idx..])
        .find(|tail| char_len(tail) <= room)
        .unwrap_or("")
}
