//! URL/DNS-safe slug generation.

use crate::names::{join_with_hash, NameOptions};
use crate::sanitize::{
    hash_reserve, hash_suffix, sanitize, trim_non_alphanumeric_ends, truncate_to_length,
};

/// Build a slug with the default options (255 codepoints, 6-char hash).
///
/// See [`slugify_with_options`].
pub fn slugify(input: &str) -> String {
    slugify_with_options(input, &NameOptions::slug())
}

/// Build a slug from arbitrary text.
///
/// The output is ASCII alphanumeric runs joined by single dashes, never
/// starting or ending with a dash, followed by a hash of the original input.
/// Slashes are normalized away like any other symbol. Never fails; with a
/// zero hash length an all-symbol input yields an empty slug.
pub fn slugify_with_options(input: &str, options: &NameOptions) -> String {
    let hash = hash_suffix(input, options.effective_hash_length());
    let budget = options.max_length.saturating_sub(hash_reserve(hash.len()));

    let sanitized = sanitize(input);
    let core = trim_non_alphanumeric_ends(truncate_to_length(&sanitized, budget));

    let slug = join_with_hash(core, &hash);
    tracing::trace!("slug {:?} -> {:?}", input, slug);
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::char_len;

    #[test]
    fn test_basic_slugify() {
        assert_eq!(slugify("Hello World"), "Hello-World-a591a6");
    }

    #[test]
    fn test_empty_input_is_hash_only() {
        assert_eq!(slugify(""), "e3b0c4");
    }

    #[test]
    fn test_zero_hash_length() {
        assert_eq!(slugify_with_options("", &NameOptions::new(255, 0)), "");
        assert_eq!(
            slugify_with_options("Hello World", &NameOptions::new(255, 0)),
            "Hello-World"
        );
    }

    #[test]
    fn test_only_symbols() {
        assert_eq!(slugify("---!!!---"), "421666");
    }

    #[test]
    fn test_collision_avoidance() {
        let accented = slugify("café");
        let plain = slugify("cafe");
        assert_eq!(accented, "cafe-850f7d");
        assert_eq!(plain, "cafe-a860b8");
        assert_ne!(accented, plain);
    }

    #[test]
    fn test_slashes_allowed() {
        assert_eq!(slugify_with_options("a / b", &NameOptions::new(255, 0)), "a-b");
        assert!(slugify("path/to/page").starts_with("pathtopage-"));
    }

    #[test]
    fn test_truncation_trims_trailing_dash() {
        let options = NameOptions::new(10, 6);
        assert_eq!(slugify_with_options("abcdefghij", &options), "abc-723993");
        assert_eq!(slugify_with_options("ab cdefghij", &options), "ab-9d5917");
    }

    #[test]
    fn test_hash_longer_than_max() {
        assert_eq!(slugify_with_options("hello", &NameOptions::new(4, 6)), "2cf2");
    }

    #[test]
    fn test_dns_label_shape() {
        let inputs = ["Hello World", "  --Trim--  ", "Ünïcödé ✓ text", "a_b.c d", "!!!"];
        for input in inputs {
            let slug = slugify(input);
            assert!(slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug:?}");
            assert!(!slug.contains("--"), "{slug:?}");
        }
    }

    #[test]
    fn test_length_bound() {
        let input = "The quick brown fox jumps over the lazy dog";
        for max_length in [0, 1, 6, 7, 10, 30, 255] {
            for hash_length in [0, 6, 64] {
                let options = NameOptions::new(max_length, hash_length);
                let slug = slugify_with_options(input, &options);
                assert!(char_len(&slug) <= max_length, "{options:?} gave {slug:?}");
                assert!(char_len(&slug) >= options.effective_hash_length());
            }
        }
    }
}
