//! Command-line interface module.

mod args;
mod article;
mod output;
mod slug;
mod url;

pub use args::{ArticleArgs, Cli, Commands, OutputArgs, UrlArgs};

use anyhow::Result;

use crate::config::PermalinkConfig;

/// Run the selected subcommand.
pub fn run(cli: &Cli, config: &PermalinkConfig) -> Result<()> {
    match &cli.command {
        Commands::Slug {
            title,
            max_length,
            no_english,
            fallback_id,
            ascii,
        } => {
            let flags = slug::SlugFlags {
                max_length: *max_length,
                no_english: *no_english,
                fallback_id: *fallback_id,
                ascii: *ascii,
            };
            slug::run_slug(title, flags, config)
        }
        Commands::Encode { slug, display } => slug::run_encode(slug, *display),
        Commands::Decode { encoded } => slug::run_decode(encoded),
        Commands::Url {
            article,
            url,
            output,
        } => url::run_url(article, url, output.as_deref(), config),
        Commands::Parse {
            url,
            pattern,
            any,
            output,
        } => url::run_parse(url, *pattern, *any, output, config),
        Commands::Variations {
            article,
            base_url,
            output,
        } => url::run_variations(article, base_url.as_deref(), output, config),
    }
}
