//! Bengali-script slugs and news article permalinks.
//!
//! - [`slug`]: title → slug, percent encoding and decoding
//! - [`permalink`]: article → URL under one of eight patterns, and back
//! - [`article`]: article metadata and publish dates
//! - [`config`]: `permalink.toml`
//! - [`cli`]: the `bnlink` command
//!
//! ```ignore
//! use bangla_permalink::{ArticleInfo, PublishDate, UrlOptions, generate_url};
//!
//! let article = ArticleInfo::new(1, "বাংলাদেশে নতুন প্রযুক্তির উন্নতি", "প্রযুক্তি", PublishDate::new(2025, 1, 26));
//! let url = generate_url(&article, &UrlOptions::default().with_base_url("https://bengali-news.com"));
//! assert_eq!(url, "https://bengali-news.com/2025/01/26/প্রযুক্তি/বাংলাদেশে-নতুন-প্রযুক্তির-উন্নতি");
//! ```

pub mod article;
pub mod cli;
pub mod config;
pub mod logger;
pub mod permalink;
pub mod slug;

pub use article::{ArticleInfo, DateError, Language, ParsedArticle, PublishDate};
pub use permalink::{
    Pattern, UrlOptions, UrlPreset, generate_url, generate_variations, parse_url,
    parse_url_with_prefix, seo_friendly_url,
};
pub use slug::{SlugOptions, decode_slug, encode_slug, generate_ascii_slug, generate_slug};
