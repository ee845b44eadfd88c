//! Named option bundles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Pattern, UrlOptions};

/// Preset URL styles.
///
/// A preset only pre-fills `pattern`, `max_title_length` and
/// `use_count_padding`; everything else keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlPreset {
    MajorNews,
    BengaliNews,
    BlogStyle,
    Minimal,
    Hierarchical,
    CountBased,
}

impl UrlPreset {
    pub const ALL: [Self; 6] = [
        Self::MajorNews,
        Self::BengaliNews,
        Self::BlogStyle,
        Self::Minimal,
        Self::Hierarchical,
        Self::CountBased,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MajorNews => "major-news",
            Self::BengaliNews => "bengali-news",
            Self::BlogStyle => "blog-style",
            Self::Minimal => "minimal",
            Self::Hierarchical => "hierarchical",
            Self::CountBased => "count-based",
        }
    }

    /// `(pattern, max_title_length, use_count_padding)`
    const fn shape(self) -> (Pattern, usize, bool) {
        match self {
            Self::MajorNews => (Pattern::DateCategoryTitle, 100, false),
            Self::BengaliNews => (Pattern::BengaliTraditional, 150, false),
            Self::BlogStyle => (Pattern::SimpleDated, 80, false),
            Self::Minimal => (Pattern::CountOnly, 50, false),
            Self::Hierarchical => (Pattern::Hierarchical, 100, false),
            Self::CountBased => (Pattern::DateCountTitle, 100, true),
        }
    }

    pub fn options(self) -> UrlOptions {
        let (pattern, max_title_length, use_count_padding) = self.shape();
        UrlOptions {
            pattern,
            max_title_length,
            use_count_padding,
            ..UrlOptions::default()
        }
    }
}

impl fmt::Display for UrlPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset `{0}`")]
pub struct UnknownPreset(pub String);

impl FromStr for UrlPreset {
    type Err = UnknownPreset;

    /// Accepts kebab-case (`major-news`) and camelCase (`majorNews`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().replace('-', "").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}
