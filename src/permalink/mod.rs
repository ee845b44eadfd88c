//! Article permalinks.
//!
//! - [`pattern`]: the eight path layouts
//! - [`preset`]: named option bundles
//! - `build`: [`ArticleInfo`] → path
//! - `parse`: path → [`ParsedArticle`](crate::article::ParsedArticle)
//! - `path`: scheme/host and path-prefix handling
//!
//! Every text segment goes through the slug codec, so categories follow the
//! same punctuation and length rules as titles.
//!
//! ```ignore
//! let article = ArticleInfo::new(1, "বাংলাদেশে নতুন প্রযুক্তির উন্নতি", "প্রযুক্তি", date);
//! let options = UrlOptions::default().with_base_url("https://bengali-news.com");
//! generate_url(&article, &options);
//! // https://bengali-news.com/2025/01/26/প্রযুক্তি/বাংলাদেশে-নতুন-প্রযুক্তির-উন্নতি
//! ```

mod build;
mod parse;
mod path;
pub mod pattern;
pub mod preset;

pub use build::generate_url;
pub use parse::{parse_url, parse_url_with_prefix};
pub use path::{request_path, strip_path_prefix, url_path_prefix};
pub use pattern::{ARTICLE_SEGMENT, NEWS_SEGMENT, Pattern, SANGBAD_SEGMENT, UnknownPattern};
pub use preset::{UnknownPreset, UrlPreset};

use std::collections::BTreeMap;

use crate::article::ArticleInfo;
use crate::slug::DEFAULT_MAX_LENGTH;

/// Default length limit for category, subcategory and region segments.
pub const DEFAULT_CATEGORY_MAX_LENGTH: usize = 50;

/// Options for [`generate_url`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlOptions {
    pub pattern: Pattern,
    /// Prepended verbatim (a trailing `/` is not doubled). Empty for bare paths.
    pub base_url: String,
    /// Length limit of the title segment, in characters.
    pub max_title_length: usize,
    /// Length limit of category, subcategory and region segments.
    pub category_max_length: usize,
    /// Render counters as three zero-padded digits.
    pub use_count_padding: bool,
    /// Percent-encode every path segment.
    pub encoded: bool,
    /// Use `article-{id}` when the title yields no usable slug.
    pub fallback_to_id: bool,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            base_url: String::new(),
            max_title_length: DEFAULT_MAX_LENGTH,
            category_max_length: DEFAULT_CATEGORY_MAX_LENGTH,
            use_count_padding: false,
            encoded: false,
            fallback_to_id: true,
        }
    }
}

impl UrlOptions {
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_max_title_length(mut self, max_title_length: usize) -> Self {
        self.max_title_length = max_title_length;
        self
    }

    pub fn with_count_padding(mut self, use_count_padding: bool) -> Self {
        self.use_count_padding = use_count_padding;
        self
    }

    pub fn with_encoded(mut self, encoded: bool) -> Self {
        self.encoded = encoded;
        self
    }

    pub fn with_fallback_to_id(mut self, fallback_to_id: bool) -> Self {
        self.fallback_to_id = fallback_to_id;
        self
    }
}

/// One URL per pattern, default options, keyed by pattern.
///
/// Meant for offering alternative links to an editor.
pub fn generate_variations(article: &ArticleInfo, base_url: &str) -> BTreeMap<Pattern, String> {
    Pattern::ALL
        .into_iter()
        .map(|pattern| {
            let options = UrlOptions::default()
                .with_pattern(pattern)
                .with_base_url(base_url);
            (pattern, generate_url(article, &options))
        })
        .collect()
}

/// The shareable link produced after an article is saved: `major-news`
/// layout, readable (not percent-encoded).
pub fn seo_friendly_url(article: &ArticleInfo, base_url: &str) -> String {
    let options = UrlPreset::MajorNews.options().with_base_url(base_url);
    generate_url(article, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::PublishDate;

    fn article() -> ArticleInfo {
        ArticleInfo::new(
            12,
            "বাংলাদেশে নতুন প্রযুক্তির উন্নতি",
            "প্রযুক্তি",
            PublishDate::new(2025, 1, 26),
        )
    }

    #[test]
    fn test_variations_cover_every_pattern() {
        let variations = generate_variations(&article(), "https://bengali-news.com");

        assert_eq!(variations.len(), Pattern::ALL.len());
        for (pattern, url) in &variations {
            assert!(url.starts_with("https://bengali-news.com/"), "{pattern}: {url}");
            assert!(
                url.ends_with("/বাংলাদেশে-নতুন-প্রযুক্তির-উন্নতি"),
                "{pattern}: {url}"
            );
        }
        assert_eq!(
            variations[&Pattern::CountOnly],
            "https://bengali-news.com/article/12/বাংলাদেশে-নতুন-প্রযুক্তির-উন্নতি"
        );
    }

    #[test]
    fn test_variations_serialize_with_pattern_names() {
        let variations = generate_variations(&article(), "");
        let json = serde_json::to_value(&variations).unwrap();
        assert_eq!(
            json["simple-dated"],
            "/20250126/বাংলাদেশে-নতুন-প্রযুক্তির-উন্নতি"
        );
    }

    #[test]
    fn test_seo_friendly_url() {
        assert_eq!(
            seo_friendly_url(&article(), "https://bengali-news.com/"),
            "https://bengali-news.com/2025/01/26/প্রযুক্তি/বাংলাদেশে-নতুন-প্রযুক্তির-উন্নতি"
        );
    }

    #[test]
    fn test_default_options() {
        let options = UrlOptions::default();
        assert_eq!(options.pattern, Pattern::DateCategoryTitle);
        assert_eq!(options.max_title_length, 100);
        assert!(options.fallback_to_id);
        assert!(!options.encoded);
        assert!(options.base_url.is_empty());
    }
}
