//! Path generation.

use crate::article::{ArticleInfo, PublishDate};
use crate::slug::{SlugOptions, encode_slug, generate_slug};

use super::{ARTICLE_SEGMENT, NEWS_SEGMENT, Pattern, SANGBAD_SEGMENT, UrlOptions};

/// Build the permalink of `article` under `options.pattern`.
///
/// Never fails: an unusable title becomes `article-{id}` (or `untitled`
/// when `fallback_to_id` is off).
pub fn generate_url(article: &ArticleInfo, options: &UrlOptions) -> String {
    let mut url = options.base_url.trim_end_matches('/').to_string();

    for segment in segments(article, options) {
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        if options.encoded {
            url.push_str(&encode_slug(&segment, false));
        } else {
            url.push_str(&segment);
        }
    }

    url
}

/// Path segments in pattern order, unencoded.
fn segments(article: &ArticleInfo, options: &UrlOptions) -> Vec<String> {
    let title = title_segment(article, options);
    let category = || text_segment(&article.category, options);
    let subcategory = || optional_segment(article.subcategory.as_deref(), options);
    let region = || optional_segment(article.region.as_deref(), options);

    let mut out = Vec::with_capacity(6);
    match options.pattern {
        Pattern::DateCategoryTitle => {
            out.extend(date_segments(article.publish_date));
            out.push(category());
        }
        Pattern::CategoryDateTitle => {
            out.push(category());
            out.extend(date_segments(article.publish_date));
        }
        Pattern::DateCountTitle => {
            out.extend(date_segments(article.publish_date));
            let count = article.daily_count.map_or(article.id, u64::from);
            out.push(count_segment(count, options.use_count_padding));
        }
        Pattern::CategoryCountTitle => {
            out.push(category());
            let count = article.total_count.map_or(article.id, u64::from);
            out.push(count_segment(count, options.use_count_padding));
        }
        Pattern::Hierarchical => {
            out.push(NEWS_SEGMENT.to_string());
            out.push(category());
            out.extend(subcategory());
            out.extend(region());
        }
        Pattern::SimpleDated => {
            out.push(article.publish_date.to_compact());
        }
        Pattern::CountOnly => {
            out.push(ARTICLE_SEGMENT.to_string());
            out.push(article.id.to_string());
        }
        Pattern::BengaliTraditional => {
            out.push(SANGBAD_SEGMENT.to_string());
            out.push(category());
            out.extend(subcategory());
        }
    }
    out.push(title);
    out
}

fn title_segment(article: &ArticleInfo, options: &UrlOptions) -> String {
    let slug_options = SlugOptions {
        max_length: options.max_title_length,
        include_english: true,
        fallback_id: options.fallback_to_id.then_some(article.id),
    };
    generate_slug(&article.title, &slug_options)
}

/// Category, subcategory or region.
fn text_segment(text: &str, options: &UrlOptions) -> String {
    let slug_options = SlugOptions::default().with_max_length(options.category_max_length);
    generate_slug(text, &slug_options)
}

/// Absent or blank optional fields produce no segment at all.
fn optional_segment(text: Option<&str>, options: &UrlOptions) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
        .map(|t| text_segment(t, options))
}

fn date_segments(date: PublishDate) -> [String; 3] {
    [
        format!("{:04}", date.year),
        format!("{:02}", date.month),
        format!("{:02}", date.day),
    ]
}

fn count_segment(count: u64, padded: bool) -> String {
    if padded {
        format!("{count:03}")
    } else {
        count.to_string()
    }
}
