//! Title → slug.
//!
//! The pipeline, in order:
//!
//! 1. blank title → fallback token
//! 2. NFC, lower-case
//! 3. punctuation table (`।` → `-`, `॥` → `--`, dashes → `-`, quotes and `…` dropped)
//! 4. keep Bengali block, whitespace, `-`, `_`, ASCII digits (and Latin letters if asked)
//! 5. collapse separator runs into one `-`, trim `-`
//! 6. cut to `max_length` on a grapheme boundary
//! 7. fewer than two characters left → fallback token

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use super::{MIN_SLUG_CHARS, SlugOptions};

/// Bengali Unicode block.
const BENGALI_BLOCK: std::ops::RangeInclusive<char> = '\u{0980}'..='\u{09FF}';

/// Bengali virama. Left at the end of a cut it would start a conjunct with nothing.
const HASANTA: char = '\u{09CD}';

/// Punctuation with a fixed ASCII-safe replacement.
static PUNCTUATION: &[(char, &str)] = &[
    ('\u{0964}', "-"),  // । danda
    ('\u{0965}', "--"), // ॥ double danda
    ('\u{2013}', "-"),  // – en dash
    ('\u{2014}', "-"),  // — em dash
    ('\u{2018}', ""),   // ‘
    ('\u{2019}', ""),   // ’
    ('\u{201C}', ""),   // “
    ('\u{201D}', ""),   // ”
    ('\u{2026}', ""),   // …
];

static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ _-]+").unwrap());

/// Convert a (mostly Bengali) title into a URL path segment.
///
/// Deterministic, never longer than `options.max_length` characters (limits
/// below [`MIN_SLUG_CHARS`] are raised to it), never empty, never starting or
/// ending with `-`.
pub fn generate_slug(title: &str, options: &SlugOptions) -> String {
    let max_length = options.max_length.max(MIN_SLUG_CHARS);
    if title.trim().is_empty() {
        return fallback(options.fallback_id, max_length);
    }

    let normalized = title.nfc().collect::<String>().to_lowercase();
    let filtered = replace_and_filter(&normalized, options.include_english);
    let collapsed = SEPARATOR_RUN.replace_all(&filtered, "-");
    let mut slug = collapsed.trim_matches('-').to_string();

    if slug.chars().count() > max_length {
        slug = truncate(&slug, max_length);
    }

    if slug.chars().count() < MIN_SLUG_CHARS {
        return fallback(options.fallback_id, max_length);
    }

    slug
}

/// Transliterate to ASCII first, then slugify with Latin letters kept.
///
/// For English-language share links of Bengali articles.
pub fn generate_ascii_slug(title: &str, options: &SlugOptions) -> String {
    let ascii = deunicode::deunicode(title);
    generate_slug(&ascii, &options.with_english(true))
}

/// Apply the punctuation table and drop every character outside the allowed set.
fn replace_and_filter(text: &str, include_english: bool) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        if let Some((_, replacement)) = PUNCTUATION.iter().find(|(p, _)| *p == c) {
            out.push_str(replacement);
        } else if c.is_whitespace() {
            out.push(' ');
        } else if is_slug_char(c, include_english) {
            out.push(c);
        }
    }

    out
}

#[inline]
fn is_slug_char(c: char, include_english: bool) -> bool {
    BENGALI_BLOCK.contains(&c)
        || matches!(c, '-' | '_')
        || c.is_ascii_digit()
        || (include_english && c.is_ascii_alphabetic())
}

/// Cut to at most `max_chars` characters without splitting a grapheme cluster.
fn truncate(slug: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(slug.len());
    let mut count = 0;

    for grapheme in slug.graphemes(true) {
        let len = grapheme.chars().count();
        if count + len > max_chars {
            break;
        }
        out.push_str(grapheme);
        count += len;
    }

    out.trim_end_matches(|c: char| c == HASANTA || c == '-').to_string()
}

/// `article-{id}` or `untitled`, clipped to the length limit.
fn fallback(fallback_id: Option<u64>, max_length: usize) -> String {
    let token = match fallback_id {
        Some(id) => format!("article-{id}"),
        None => "untitled".to_string(),
    };

    // ASCII only, so byte and char lengths agree
    if token.len() <= max_length {
        token
    } else {
        token[..max_length].trim_end_matches('-').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(title: &str) -> String {
        generate_slug(title, &SlugOptions::default())
    }

    #[test]
    fn test_bengali_title() {
        assert_eq!(
            slug("বাংলাদেশে নতুন প্রযুক্তির উন্নতি"),
            "বাংলাদেশে-নতুন-প্রযুক্তির-উন্নতি"
        );
    }

    #[test]
    fn test_empty_title_fallback() {
        assert_eq!(slug(""), "untitled");
        assert_eq!(slug("   \t\n"), "untitled");
        assert_eq!(
            generate_slug("", &SlugOptions::default().with_fallback_id(7)),
            "article-7"
        );
        assert_eq!(
            generate_slug("   ", &SlugOptions::default().with_fallback_id(777)),
            "article-777"
        );
    }

    #[test]
    fn test_nothing_usable_falls_back() {
        assert_eq!(slug("!!! ??? ..."), "untitled");
        assert_eq!(
            generate_slug("“…”", &SlugOptions::default().with_fallback_id(3)),
            "article-3"
        );
        // One character is too short
        assert_eq!(slug("ক"), "untitled");
    }

    #[test]
    fn test_danda_and_dashes() {
        assert_eq!(slug("সরকার। নতুন নীতি"), "সরকার-নতুন-নীতি");
        assert_eq!(slug("প্রথম॥দ্বিতীয়"), slug("প্রথম-দ্বিতীয়"));
        assert_eq!(slug("ঢাকা—চট্টগ্রাম"), "ঢাকা-চট্টগ্রাম");
        assert_eq!(slug("ঢাকা – চট্টগ্রাম"), "ঢাকা-চট্টগ্রাম");
    }

    #[test]
    fn test_quotes_and_ellipsis_removed() {
        assert_eq!(slug("“ঢাকা” ‘শহর’…"), "ঢাকা-শহর");
    }

    #[test]
    fn test_whitespace_and_underscores_collapse() {
        assert_eq!(slug("  ঢাকা\tশহর\n\nখবর  "), "ঢাকা-শহর-খবর");
        assert_eq!(slug("foo_bar  -- baz"), "foo-bar-baz");
        assert_eq!(slug("—শিরোনাম—"), "শিরোনাম");
    }

    #[test]
    fn test_english_letters() {
        assert_eq!(slug("Hello World 2025"), "hello-world-2025");
        assert_eq!(
            generate_slug("iPhone 16 বাজারে", &SlugOptions::default().with_english(false)),
            "16-বাজারে"
        );
        assert_eq!(slug("COVID-19 টিকা"), "covid-19-টিকা");
    }

    #[test]
    fn test_symbols_stripped() {
        assert_eq!(slug("দাম ১০০% কমেছে!"), "দাম-১০০-কমেছে");
        assert_eq!(slug("a&b=c?d#e+f"), "abcdef");
    }

    #[test]
    fn test_nfc_normalization() {
        // ো written as ে + া
        let decomposed = "\u{0995}\u{09C7}\u{09BE}\u{09A8}";
        let composed = "\u{0995}\u{09CB}\u{09A8}";
        assert_eq!(slug(decomposed), composed);
        assert_eq!(slug(decomposed), slug(composed));
    }

    #[test]
    fn test_max_length_bound() {
        let title = "বাংলাদেশে নতুন প্রযুক্তির উন্নতি এবং ভবিষ্যতের সম্ভাবনা";
        for max in 2..=60 {
            let s = generate_slug(title, &SlugOptions::default().with_max_length(max));
            assert!(s.chars().count() <= max, "{s:?} longer than {max}");
            assert!(!s.starts_with('-') && !s.ends_with('-'), "{s:?}");
            assert!(!s.ends_with(HASANTA), "{s:?} ends with hasanta");
        }
    }

    #[test]
    fn test_truncate_keeps_vowel_signs_attached() {
        let s = generate_slug("কিকিকি", &SlugOptions::default().with_max_length(3));
        assert_eq!(s, "কি");
    }

    #[test]
    fn test_truncate_trims_trailing_hyphen() {
        let s = generate_slug("ঢাকা শহর", &SlugOptions::default().with_max_length(5));
        assert_eq!(s, "ঢাকা");
    }

    #[test]
    fn test_fallback_clipped_to_limit() {
        let options = SlugOptions::default().with_max_length(2);
        assert_eq!(generate_slug("", &options), "un");
        assert_eq!(generate_slug("", &options.with_fallback_id(5)), "ar");
        // "article-" would end with a hyphen at 8 chars
        let options = SlugOptions::default()
            .with_max_length(8)
            .with_fallback_id(12);
        assert_eq!(generate_slug("", &options), "article");
    }

    #[test]
    fn test_tiny_limits_raised_to_minimum() {
        for max in [0, 1] {
            let options = SlugOptions::default().with_max_length(max);
            assert_eq!(generate_slug("শিরোনাম", &options).chars().count(), 2);
            assert_eq!(generate_slug("", &options), "un");
            assert_eq!(generate_slug("", &options.with_fallback_id(9)), "ar");
        }
    }

    #[test]
    fn test_no_forbidden_output() {
        let titles = [
            "প্রধানমন্ত্রী বললেন। “উন্নয়ন চলবে”…",
            "খেলা॥ ফুটবল — ক্রিকেট – হকি",
            "  --  ঢাকা  __  শহর  --  ",
            "‘সংবাদ’ । ।  । বিশ্ব",
        ];
        for title in titles {
            let s = slug(title);
            for forbidden in ['।', '॥', '“', '”', '‘', '’', '–', '—', '…', ' '] {
                assert!(!s.contains(forbidden), "{s:?} contains {forbidden:?}");
            }
            assert!(!s.contains("--"), "{s:?}");
            assert!(!s.starts_with('-') && !s.ends_with('-'), "{s:?}");
        }
    }

    #[test]
    fn test_deterministic() {
        let title = "নির্বাচন ২০২৬: কী ঘটছে?";
        assert_eq!(slug(title), slug(title));
    }

    #[test]
    fn test_ascii_slug() {
        let options = SlugOptions::default().with_english(false);
        assert_eq!(generate_ascii_slug("Café Dhaka", &options), "cafe-dhaka");

        let s = generate_ascii_slug("বাংলাদেশ ক্রিকেট", &SlugOptions::default());
        assert!(s.is_ascii(), "{s:?}");
        assert!(!s.is_empty());
    }
}
