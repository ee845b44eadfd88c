//! `url`, `parse` and `variations` commands.

use std::path::Path;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::article::ParsedArticle;
use crate::config::{PermalinkConfig, update_option};
use crate::permalink::{
    Pattern, UrlOptions, generate_url, generate_variations, parse_url_with_prefix,
};
use crate::{debug, log};

use super::args::{ArticleArgs, OutputArgs, UrlArgs};
use super::article::read_article;
use super::output::{write_json, write_text};

pub(super) fn run_url(
    article: &ArticleArgs,
    args: &UrlArgs,
    output: Option<&Path>,
    config: &PermalinkConfig,
) -> Result<()> {
    let article = read_article(article)?;
    let options = url_options(args, config);
    debug!("url"; "pattern {}, base `{}`", options.pattern, options.base_url);

    write_text(&generate_url(&article, &options), output)
}

pub(super) fn run_variations(
    article: &ArticleArgs,
    base_url: Option<&str>,
    output: &OutputArgs,
    config: &PermalinkConfig,
) -> Result<()> {
    let article = read_article(article)?;
    let base_url = base_url.unwrap_or(config.site.base_url());
    write_json(&generate_variations(&article, base_url), output)
}

/// A successful parse, tagged with the pattern that matched.
#[derive(Debug, Serialize)]
struct ParseReport {
    pattern: Pattern,
    #[serde(flatten)]
    article: ParsedArticle,
}

pub(super) fn run_parse(
    url: &str,
    pattern: Option<Pattern>,
    any: bool,
    output: &OutputArgs,
    config: &PermalinkConfig,
) -> Result<()> {
    let candidates = candidate_patterns(pattern, any, config);
    let prefix = config.path_prefix();

    match first_match(url, &candidates, &prefix) {
        Some(report) => write_json(&report, output),
        None => {
            let names: Vec<_> = candidates.iter().map(|p| p.as_str()).collect();
            bail!("`{url}` does not match {}", names.join(", "))
        }
    }
}

fn candidate_patterns(
    pattern: Option<Pattern>,
    any: bool,
    config: &PermalinkConfig,
) -> Vec<Pattern> {
    if any {
        Pattern::ALL.to_vec()
    } else {
        vec![pattern.unwrap_or(config.url_options().pattern)]
    }
}

/// First pattern (in the given order) that parses `url`.
fn first_match(url: &str, candidates: &[Pattern], prefix: &str) -> Option<ParseReport> {
    candidates.iter().find_map(|&pattern| {
        let parsed = parse_url_with_prefix(url, pattern, prefix);
        match &parsed {
            Some(_) => log!("parse"; "matched {}", pattern),
            None => debug!("parse"; "no match for {}", pattern),
        }
        parsed.map(|article| ParseReport { pattern, article })
    })
}

/// Config (defaults < preset < `[url]` keys), then command-line flags.
///
/// `--preset` replaces what the config's layout resolved to; the
/// remaining flags override individual options.
fn url_options(args: &UrlArgs, config: &PermalinkConfig) -> UrlOptions {
    let mut options = config.url_options();

    if let Some(preset) = args.preset {
        let preset = preset.options();
        options.pattern = preset.pattern;
        options.max_title_length = preset.max_title_length;
        options.use_count_padding = preset.use_count_padding;
    }

    update_option(&mut options.pattern, args.pattern.as_ref());
    update_option(&mut options.base_url, args.base_url.as_ref());
    update_option(&mut options.max_title_length, args.max_title_length.as_ref());
    update_option(&mut options.use_count_padding, args.count_padding.as_ref());
    update_option(&mut options.encoded, args.encoded.as_ref());
    if args.no_fallback {
        options.fallback_to_id = false;
    }
    options
}
