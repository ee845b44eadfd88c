//! Article input from flags or JSON.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use crate::article::{ArticleInfo, PublishDate};
use crate::debug;

use super::args::ArticleArgs;

/// Build the article described by the command line.
pub(super) fn read_article(args: &ArticleArgs) -> Result<ArticleInfo> {
    match &args.json {
        Some(path) => {
            let content = read_input(path)?;
            parse_article_json(&content)
                .with_context(|| format!("invalid article JSON in `{}`", path.display()))
        }
        None => Ok(article_from_flags(args, PublishDate::today())),
    }
}

/// Read a file, or stdin for `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        debug!("input"; "reading article from stdin");
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read stdin")?;
        Ok(content)
    } else {
        debug!("input"; "reading article from {}", path.display());
        fs::read_to_string(path).with_context(|| format!("failed to read `{}`", path.display()))
    }
}

fn parse_article_json(content: &str) -> Result<ArticleInfo> {
    let article: ArticleInfo = serde_json::from_str(content)?;
    Ok(article)
}

/// `today` fills in a missing `--date`.
fn article_from_flags(args: &ArticleArgs, today: PublishDate) -> ArticleInfo {
    let mut article = ArticleInfo::new(
        args.id,
        args.title.as_str(),
        args.category.as_str(),
        args.date.unwrap_or(today),
    );
    article.subcategory = args.subcategory.clone();
    article.region = args.region.clone();
    article.daily_count = args.daily_count;
    article.total_count = args.total_count;
    article
}
