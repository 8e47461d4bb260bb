//! Filesystem-safe filename generation.

use crate::error::{Error, Result};
use crate::names::{join_with_hash, NameOptions};
use crate::sanitize::{
    char_len, fit_extension, hash_reserve, hash_suffix, sanitize, split_extension,
    trim_non_alphanumeric_ends, truncate_to_length,
};

/// Build a filename with the default options (255 codepoints, 7-char hash).
///
/// See [`filename_with_options`].
pub fn filename(input: &str) -> Result<String> {
    filename_with_options(input, &NameOptions::filename())
}

/// Build a filesystem-safe filename from arbitrary text.
///
/// The base is normalized to dash-joined ASCII alphanumerics, truncated so
/// that base, hash and extension fit in `max_length`, then joined with a
/// hash of the original input. The trailing extension chain is kept and
/// lowercased: `My Report.PDF` becomes `My-Report-ed2b5ed.pdf`.
///
/// Returns an error if the input contains a path separator (`/`).
pub fn filename_with_options(input: &str, options: &NameOptions) -> Result<String> {
    if input.contains('/') {
        tracing::debug!("Rejecting filename input with path separator: {:?}", input);
        return Err(Error::InvalidInput(format!(
            "Path separators not allowed in filename: '{}'",
            input
        )));
    }

    let hash = hash_suffix(input, options.effective_hash_length());
    let (base, extension) = split_extension(input);
    let extension = extension.to_lowercase();

    let room = options.max_length.saturating_sub(hash_reserve(hash.len()));
    let fitted = fit_extension(&extension, room);
    if fitted.len() != extension.len() {
        tracing::debug!(
            "Extension {:?} shortened to {:?} to fit {} codepoints",
            extension,
            fitted,
            room
        );
    }

    let budget = room.saturating_sub(char_len(fitted));
    let sanitized = sanitize(base);
    let core = trim_non_alphanumeric_ends(truncate_to_length(&sanitized, budget));

    let mut name = join_with_hash(core, &hash);
    name.push_str(fitted);

    tracing::trace!("filename {:?} -> {:?}", input, name);
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_preserved_and_lowercased() {
        assert_eq!(filename("My Report.PDF").unwrap(), "My-Report-ed2b5ed.pdf");
    }

    #[test]
    fn test_extension_chain() {
        assert_eq!(
            filename("archive.tar.gz").unwrap(),
            "archive-d772471.tar.gz"
        );
    }

    #[test]
    fn test_transliterated_base() {
        assert_eq!(
            filename("Crème Brûlée Recipe.DOCX").unwrap(),
            "Creme-Brulee-Recipe-1254671.docx"
        );
    }

    #[test]
    fn test_dotfile() {
        assert_eq!(filename(".bashrc").unwrap(), "b7cf3e9.bashrc");
    }

    #[test]
    fn test_empty_input_is_hash_only() {
        assert_eq!(filename("").unwrap(), "e3b0c44");
    }

    #[test]
    fn test_path_separator_rejected() {
        assert!(matches!(filename("a/b"), Err(Error::InvalidInput(_))));
        assert!(matches!(filename("/etc/passwd"), Err(Error::InvalidInput(_))));
        assert!(matches!(filename("dir/"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_backslash_is_sanitized_not_rejected() {
        let name = filename("a\\b.txt").unwrap();
        assert!(!name.contains('\\'));
        assert!(name.starts_with("ab-"));
        assert!(name.ends_with(".txt"));
    }

    #[test]
    fn test_zero_hash_length() {
        let options = NameOptions::new(255, 0);
        assert_eq!(
            filename_with_options("My Report.PDF", &options).unwrap(),
            "My-Report.pdf"
        );
        assert_eq!(filename_with_options("", &options).unwrap(), "");
        assert_eq!(filename_with_options("!!!.txt", &options).unwrap(), ".txt");
    }

    #[test]
    fn test_base_truncated_to_budget() {
        // 14 = 3 base + 1 dash + 7 hash + 3 extension
        let options = NameOptions::new(14, 7);
        assert_eq!(
            filename_with_options("data.tar.gz", &options).unwrap(),
            "dat-2f351a8.gz"
        );
    }

    #[test]
    fn test_oversized_extension_dropped() {
        let options = NameOptions::new(12, 7);
        assert_eq!(
            filename_with_options("x.verylongextension", &options).unwrap(),
            "x-ad02f63"
        );
    }

    #[test]
    fn test_length_bound() {
        let inputs = [
            "",
            "a",
            "My Report.PDF",
            "archive.tar.gz",
            "a very long name with many words in it.markdown",
            "日本語のファイル名.txt",
            "x.verylongextension",
        ];
        for max_length in [0, 1, 5, 8, 12, 20, 255] {
            for hash_length in [0, 3, 7, 80] {
                let options = NameOptions::new(max_length, hash_length);
                for input in inputs {
                    let name = filename_with_options(input, &options).unwrap();
                    assert!(
                        char_len(&name) <= max_length,
                        "{input:?} with {options:?} gave {name:?}"
                    );
                    assert!(char_len(&name) >= options.effective_hash_length());
                }
            }
        }
    }

    #[test]
    fn test_output_character_set() {
        let name = filename("  ¡Hola, señor!  (copy 2).Tar.GZ").unwrap();
        let (base, extension) = name.split_at(name.find('.').unwrap());
        assert_eq!(extension, ".tar.gz");
        assert!(base.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
        assert!(!base.starts_with('-') && !base.ends_with('-'));
        assert!(!base.contains("--"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(filename("Report.pdf").unwrap(), filename("Report.pdf").unwrap());
    }
}
