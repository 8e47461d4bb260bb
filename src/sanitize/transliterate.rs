//! Unicode to ASCII transliteration.

use deunicode::deunicode_char;

/// Transliterate arbitrary text to printable ASCII.
///
/// Non-ASCII characters are folded with `deunicode` (`é` -> `e`, `ß` -> `ss`).
/// Characters without a mapping are dropped rather than replaced with a
/// placeholder. ASCII whitespace becomes a plain space and other control
/// characters are dropped, so the output only contains `' '..='~'`.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for ch in input.chars() {
        if ch.is_ascii() {
            push_printable(&mut out, ch);
            continue;
        }

        if let Some(folded) = deunicode_char(ch) {
            for fc in folded.chars() {
                push_printable(&mut out, fc);
            }
        }
    }

    out
}

fn push_printable(out: &mut String, ch: char) {
    if ch.is_ascii_whitespace() {
        out.push(' ');
    } else if ch.is_ascii_graphic() {
        out.push(ch);
    }
}

/// Decode raw bytes as UTF-8, silently discarding invalid sequences.
///
/// Unlike `String::from_utf8_lossy` no U+FFFD is inserted, so the decoded
/// text (and any hash computed over it) only reflects the valid input.
pub fn decode_discarding_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
