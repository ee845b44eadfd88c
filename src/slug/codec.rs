//! Percent-encoding for slugs.
//!
//! Two encodings:
//! - display: only the characters that break a query string or fragment
//!   (`& = ? # +` and space) are escaped, Bengali stays readable
//! - full: URI-component encoding, every non-ASCII byte escaped
//!
//! Decoding undoes either, including slugs that were encoded twice.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use unicode_normalization::UnicodeNormalization;

/// URI-component set: everything except ASCII alphanumerics and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Upper bound on nested decoding rounds.
const MAX_DECODE_ROUNDS: usize = 8;

/// Percent-encode a slug for a URL path segment.
pub fn encode_slug(slug: &str, preserve_display: bool) -> String {
    if preserve_display {
        encode_reserved(slug)
    } else {
        utf8_percent_encode(slug, COMPONENT).to_string()
    }
}

/// Escape only the query/fragment delimiters, keep everything else as-is.
///
/// `utf8_percent_encode` always escapes non-ASCII, so this one is by hand.
fn encode_reserved(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    for c in slug.chars() {
        match c {
            '&' => out.push_str("%26"),
            '=' => out.push_str("%3D"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            '+' => out.push_str("%2B"),
            ' ' => out.push_str("%20"),
            _ => out.push(c),
        }
    }
    out
}

/// Outcome of percent-decoding.
#[derive(Debug, PartialEq, Eq)]
enum Decoded {
    /// Fully decoded text (not yet normalized).
    Text(String),
    /// Malformed escape or invalid UTF-8: keep the input.
    Unchanged,
}

/// Decode a percent-encoded slug for display.
///
/// Decodes repeatedly until the text stops changing. Malformed input is
/// returned unchanged; successfully decoded text is NFC-normalized.
pub fn decode_slug(encoded: &str) -> String {
    match decode_to_fixed_point(encoded) {
        Decoded::Text(text) => text.nfc().collect(),
        Decoded::Unchanged => encoded.to_string(),
    }
}

fn decode_to_fixed_point(encoded: &str) -> Decoded {
    let mut current = encoded.to_string();

    for _ in 0..MAX_DECODE_ROUNDS {
        if has_malformed_escape(&current) {
            return Decoded::Unchanged;
        }
        let next = match percent_decode_str(&current).decode_utf8() {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => return Decoded::Unchanged,
        };
        if next == current {
            break;
        }
        current = next;
    }

    Decoded::Text(current)
}

/// A `%` not followed by two hex digits.
fn has_malformed_escape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}
