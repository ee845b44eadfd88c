//! Path parsing.
//!
//! Each pattern has a fixed shape. Fixed-position patterns are matched with
//! anchored regexes; the two patterns with optional segments are split on
//! `/` and checked by segment count and literal first segment.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::article::{ParsedArticle, PublishDate};
use crate::slug::decode_slug;

use super::{NEWS_SEGMENT, Pattern, SANGBAD_SEGMENT, request_path, strip_path_prefix};

macro_rules! shape {
    ($name:ident, $re:literal) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($re).unwrap());
    };
}

shape!(DATE_CATEGORY_TITLE, r"^/([0-9]{4})/([0-9]{2})/([0-9]{2})/([^/]+)/([^/]+)/?$");
shape!(CATEGORY_DATE_TITLE, r"^/([^/]+)/([0-9]{4})/([0-9]{2})/([0-9]{2})/([^/]+)/?$");
shape!(DATE_COUNT_TITLE, r"^/([0-9]{4})/([0-9]{2})/([0-9]{2})/([0-9]+)/([^/]+)/?$");
shape!(CATEGORY_COUNT_TITLE, r"^/([^/]+)/([0-9]+)/([^/]+)/?$");
shape!(SIMPLE_DATED, r"^/([0-9]{8})/([^/]+)/?$");
shape!(COUNT_ONLY, r"^/article/([0-9]+)/([^/]+)/?$");

/// Recover article fields from a permalink.
///
/// `None` means the path does not have the pattern's shape (including
/// impossible dates and counters that overflow). Which of "malformed" and
/// "other pattern" applies is not distinguished.
pub fn parse_url(url: &str, pattern: Pattern) -> Option<ParsedArticle> {
    parse_url_with_prefix(url, pattern, "")
}

/// [`parse_url`] for sites served below the domain root: `prefix` (e.g. `bn`)
/// is stripped from the path first.
pub fn parse_url_with_prefix(url: &str, pattern: Pattern, prefix: &str) -> Option<ParsedArticle> {
    let full_path = request_path(url)?;
    let path = strip_path_prefix(&full_path, prefix);

    match pattern {
        Pattern::DateCategoryTitle => {
            let caps = DATE_CATEGORY_TITLE.captures(path)?;
            Some(ParsedArticle {
                publish_date: Some(date_from(&caps, 1)?),
                category: Some(decode_slug(&caps[4])),
                ..with_title(&caps[5])
            })
        }
        Pattern::CategoryDateTitle => {
            let caps = CATEGORY_DATE_TITLE.captures(path)?;
            Some(ParsedArticle {
                category: Some(decode_slug(&caps[1])),
                publish_date: Some(date_from(&caps, 2)?),
                ..with_title(&caps[5])
            })
        }
        Pattern::DateCountTitle => {
            let caps = DATE_COUNT_TITLE.captures(path)?;
            Some(ParsedArticle {
                publish_date: Some(date_from(&caps, 1)?),
                daily_count: Some(caps[4].parse().ok()?),
                ..with_title(&caps[5])
            })
        }
        Pattern::CategoryCountTitle => {
            let caps = CATEGORY_COUNT_TITLE.captures(path)?;
            Some(ParsedArticle {
                category: Some(decode_slug(&caps[1])),
                total_count: Some(caps[2].parse().ok()?),
                ..with_title(&caps[3])
            })
        }
        Pattern::SimpleDated => {
            let caps = SIMPLE_DATED.captures(path)?;
            Some(ParsedArticle {
                publish_date: Some(PublishDate::parse_compact(&caps[1])?),
                ..with_title(&caps[2])
            })
        }
        Pattern::CountOnly => {
            let caps = COUNT_ONLY.captures(path)?;
            Some(ParsedArticle {
                id: Some(caps[1].parse().ok()?),
                ..with_title(&caps[2])
            })
        }
        Pattern::Hierarchical => {
            // news / category / [subcategory] / [region] / title
            let segments = decoded_segments(path, NEWS_SEGMENT, 3..=5)?;
            let (title, middle) = segments.split_last()?;
            Some(ParsedArticle {
                category: middle.first().cloned(),
                subcategory: middle.get(1).cloned(),
                region: middle.get(2).cloned(),
                ..title_fields(title.clone())
            })
        }
        Pattern::BengaliTraditional => {
            // সংবাদ / category / [subcategory] / title
            let segments = decoded_segments(path, SANGBAD_SEGMENT, 3..=4)?;
            let (title, middle) = segments.split_last()?;
            Some(ParsedArticle {
                category: middle.first().cloned(),
                subcategory: middle.get(1).cloned(),
                ..title_fields(title.clone())
            })
        }
    }
}

/// Decoded segments after the literal first one.
///
/// `count` bounds the total number of segments, literal included.
fn decoded_segments(
    path: &str,
    literal: &str,
    count: std::ops::RangeInclusive<usize>,
) -> Option<Vec<String>> {
    let inner = path.strip_prefix('/')?;
    let inner = inner.strip_suffix('/').unwrap_or(inner);
    let raw: Vec<&str> = inner.split('/').collect();

    if !count.contains(&raw.len()) || raw.iter().any(|s| s.is_empty()) {
        return None;
    }
    if decode_slug(raw[0]) != literal {
        return None;
    }

    Some(raw[1..].iter().map(|s| decode_slug(s)).collect())
}

/// Date from three consecutive capture groups starting at `first`.
fn date_from(caps: &Captures<'_>, first: usize) -> Option<PublishDate> {
    PublishDate::checked(
        caps[first].parse().ok()?,
        caps[first + 1].parse().ok()?,
        caps[first + 2].parse().ok()?,
    )
    .ok()
}

fn with_title(raw: &str) -> ParsedArticle {
    title_fields(decode_slug(raw))
}

/// `slug` as found in the path, `title` with hyphens back to spaces.
fn title_fields(slug: String) -> ParsedArticle {
    ParsedArticle {
        title: Some(slug.replace('-', " ")),
        slug: Some(slug),
        ..ParsedArticle::default()
    }
}
