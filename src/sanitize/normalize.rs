//! Dash-delimited normalization.

use crate::sanitize::budget::trim_non_alphanumeric_ends;
use crate::sanitize::transliterate::transliterate;

/// Whether a character separates alphanumeric runs.
///
/// Whitespace, underscores, dashes and dots all collapse to a single dash.
fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || matches!(ch, '_' | '-' | '.')
}

/// Normalize arbitrary text into ASCII alphanumeric runs joined by single dashes.
///
/// # Steps
/// - Transliterate to ASCII.
/// - Treat runs of whitespace, `_`, `-` and `.` as one separator.
/// - Delete every other non-alphanumeric character without separating
///   (`"don't"` becomes `"dont"`).
/// - Emit a single `-` per separator run and strip dashes from both ends.
///
/// The result may be empty, for example when the input only holds symbols.
pub fn sanitize(input: &str) -> String {
    let ascii = transliterate(input);
    let mut out = String::with_capacity(ascii.len());

    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch);
        } else if is_separator(ch) && !out.ends_with('-') {
            out.push('-');
        }
    }

    trim_non_alphanumeric_ends(&out).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dash_collapsing() {
        assert_eq!(sanitize("foo   bar___baz--qux"), "foo-bar-baz-qux");
        assert_eq!(sanitize("a - _ b"), "a-b");
    }

    #[test]
    fn test_symbols_removed_without_separating() {
        assert_eq!(sanitize("don't stop"), "dont-stop");
        assert_eq!(sanitize("Hello, World!"), "Hello-World");
        assert_eq!(sanitize("a-!-b"), "a-b");
    }

    #[test]
    fn test_dots_become_dashes() {
        assert_eq!(sanitize("v1.2.3"), "v1-2-3");
        assert_eq!(sanitize("a..b"), "a-b");
    }

    #[test]
    fn test_only_symbols_is_empty() {
        assert_eq!(sanitize("---!!!---"), "");
        assert_eq!(sanitize("@#$%^&*()"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_edges_trimmed() {
        assert_eq!(sanitize("  Trim me  "), "Trim-me");
        assert_eq!(sanitize("__init__"), "init");
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(sanitize("My Report"), "My-Report");
    }

    #[test]
    fn test_transliterated() {
        assert_eq!(sanitize("Héllö Wörld"), "Hello-World");
        assert_eq!(sanitize("café"), "cafe");
    }

    #[test]
    fn test_slashes_normalized_away() {
        assert_eq!(sanitize("a/b\\c"), "abc");
        assert_eq!(sanitize("a / b"), "a-b");
    }
}
