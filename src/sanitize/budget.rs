//! Length budgeting and edge trimming.
//!
//! All lengths are counted in codepoints, never bytes.

/// Number of codepoints in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Truncate `s` to at most `max_length` codepoints.
///
/// Never splits a codepoint. A zero budget yields an empty string.
pub fn truncate_to_length(s: &str, max_length: usize) -> &str {
    match s.char_indices().nth(max_length) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Strip the run of non-alphanumeric characters at each end of `s`.
///
/// Interior characters are untouched; an all-symbol string becomes empty.
pub fn trim_non_alphanumeric_ends(s: &str) -> &str {
    s.trim_matches(|c: char| !c.is_ascii_alphanumeric())
}

/// Codepoints reserved for a hash of `hash_len` characters plus its `-` joiner.
pub fn hash_reserve(hash_len: usize) -> usize {
    if hash_len > 0 {
        hash_len + 1
    } else {
        0
    }
}
