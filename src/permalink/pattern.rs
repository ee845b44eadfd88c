//! Permalink path layouts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Literal first segment of [`Pattern::Hierarchical`].
pub const NEWS_SEGMENT: &str = "news";
/// Literal first segment of [`Pattern::CountOnly`].
pub const ARTICLE_SEGMENT: &str = "article";
/// Literal first segment of [`Pattern::BengaliTraditional`] ("news" in Bengali).
pub const SANGBAD_SEGMENT: &str = "সংবাদ";

/// Path layout of an article permalink.
///
/// | Pattern                | Segments                                       |
/// |------------------------|------------------------------------------------|
/// | `date-category-title`  | `YYYY/MM/DD`, category, title                  |
/// | `category-date-title`  | category, `YYYY/MM/DD`, title                  |
/// | `date-count-title`     | `YYYY/MM/DD`, daily count (or id), title       |
/// | `category-count-title` | category, total count (or id), title           |
/// | `hierarchical`         | `news`, category, [subcategory], [region], title |
/// | `simple-dated`         | `YYYYMMDD`, title                              |
/// | `count-only`           | `article`, id, title                           |
/// | `bengali-traditional`  | `সংবাদ`, category, [subcategory], title         |
///
/// Generation lives in `build.rs`, parsing in `parse.rs`; both match on
/// this enum exhaustively.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Pattern {
    #[default]
    DateCategoryTitle,
    CategoryDateTitle,
    DateCountTitle,
    CategoryCountTitle,
    Hierarchical,
    SimpleDated,
    CountOnly,
    BengaliTraditional,
}

impl Pattern {
    /// Every pattern, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::DateCategoryTitle,
        Self::CategoryDateTitle,
        Self::DateCountTitle,
        Self::CategoryCountTitle,
        Self::Hierarchical,
        Self::SimpleDated,
        Self::CountOnly,
        Self::BengaliTraditional,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateCategoryTitle => "date-category-title",
            Self::CategoryDateTitle => "category-date-title",
            Self::DateCountTitle => "date-count-title",
            Self::CategoryCountTitle => "category-count-title",
            Self::Hierarchical => "hierarchical",
            Self::SimpleDated => "simple-dated",
            Self::CountOnly => "count-only",
            Self::BengaliTraditional => "bengali-traditional",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pattern `{0}` (expected one of: {names})", names = pattern_names())]
pub struct UnknownPattern(pub String);

fn pattern_names() -> String {
    Pattern::ALL.map(Pattern::as_str).join(", ")
}

impl FromStr for Pattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownPattern(s.to_string()))
    }
}
