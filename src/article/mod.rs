//! Article fields read by the permalink builder.
//!
//! - [`ArticleInfo`]: everything generation may read
//! - [`ParsedArticle`]: what parsing can recover, field by field
//! - [`PublishDate`]: day-granularity date

mod date;

pub use date::{DateError, PublishDate};

use serde::{Deserialize, Serialize};

/// Article language tag. Informational only; slugs are built the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Bn,
    En,
}

/// Input to URL generation.
///
/// `author`, `tags` and `is_breaking` are carried through untouched: no
/// pattern reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleInfo {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub publish_date: PublishDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub is_breaking: bool,
}

impl ArticleInfo {
    /// Minimal article; optional fields start empty.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        category: impl Into<String>,
        publish_date: PublishDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            subcategory: None,
            region: None,
            author: None,
            tags: Vec::new(),
            publish_date,
            daily_count: None,
            total_count: None,
            language: Language::Bn,
            is_breaking: false,
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_daily_count(mut self, count: u32) -> Self {
        self.daily_count = Some(count);
        self
    }

    pub fn with_total_count(mut self, count: u32) -> Self {
        self.total_count = Some(count);
        self
    }
}

/// Fields recovered from a permalink.
///
/// Every field is independently optional; each pattern fills only what its
/// path shape carries. `slug` is the decoded title segment as it appears in
/// the path, `title` is the same text with hyphens turned back into spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedArticle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<PublishDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_from_minimal_json() {
        let json = r#"{"id": 42, "title": "শিরোনাম", "category": "খেলা", "publishDate": "2025-03-01"}"#;
        let article: ArticleInfo = serde_json::from_str(json).unwrap();

        assert_eq!(article.id, 42);
        assert_eq!(article.category, "খেলা");
        assert_eq!(article.publish_date, PublishDate::new(2025, 3, 1));
        assert_eq!(article.language, Language::Bn);
        assert!(!article.is_breaking);
        assert!(article.tags.is_empty());
        assert_eq!(article.daily_count, None);
    }

    #[test]
    fn test_article_camel_case_fields() {
        let json = r#"{
            "id": 7, "title": "t", "category": "c", "publishDate": "2025-03-01",
            "dailyCount": 3, "totalCount": 1200, "isBreaking": true,
            "language": "en", "tags": ["a", "b"], "author": "desk"
        }"#;
        let article: ArticleInfo = serde_json::from_str(json).unwrap();

        assert_eq!(article.daily_count, Some(3));
        assert_eq!(article.total_count, Some(1200));
        assert!(article.is_breaking);
        assert_eq!(article.language, Language::En);
        assert_eq!(article.tags, vec!["a", "b"]);
        assert_eq!(article.author.as_deref(), Some("desk"));
    }

    #[test]
    fn test_article_requires_date() {
        let json = r#"{"id": 1, "title": "t", "category": "c"}"#;
        assert!(serde_json::from_str::<ArticleInfo>(json).is_err());
    }

    #[test]
    fn test_parsed_article_skips_absent_fields() {
        let parsed = ParsedArticle {
            id: Some(5),
            slug: Some("a-b".into()),
            title: Some("a b".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, r#"{"id":5,"title":"a b","slug":"a-b"}"#);
    }
}
