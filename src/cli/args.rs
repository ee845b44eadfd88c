//! Command-line interface definitions.

use crate::article::PublishDate;
use crate::permalink::{Pattern, UrlPreset};
use crate::slug::MIN_SLUG_CHARS;
use clap::builder::RangedU64ValueParser;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Length limits share the config's lower bound.
fn length_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(MIN_SLUG_CHARS as u64..)
}

/// Bengali slugs and news article permalinks
#[derive(Parser, Debug, Clone)]
#[command(name = "bnlink", version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: permalink.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert a title into a URL slug
    #[command(visible_alias = "s")]
    Slug {
        /// Article title (Bengali, English or mixed)
        title: String,

        /// Maximum slug length in characters
        #[arg(short = 'm', long, value_parser = length_parser())]
        max_length: Option<usize>,

        /// Drop Latin letters
        #[arg(long)]
        no_english: bool,

        /// Use `article-{ID}` when the title yields no slug
        #[arg(long, value_name = "ID")]
        fallback_id: Option<u64>,

        /// Transliterate to an ASCII-only slug
        #[arg(long)]
        ascii: bool,
    },

    /// Percent-encode a slug for use in a URL
    #[command(visible_alias = "e")]
    Encode {
        slug: String,

        /// Encode only characters that break URLs, keep Bengali readable
        #[arg(short, long)]
        display: bool,
    },

    /// Decode a percent-encoded slug
    #[command(visible_alias = "d")]
    Decode { encoded: String },

    /// Generate the permalink of an article
    #[command(visible_alias = "u")]
    Url {
        #[command(flatten)]
        article: ArticleArgs,

        #[command(flatten)]
        url: UrlArgs,

        /// Write the URL to a file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Extract article fields from a permalink
    #[command(visible_alias = "p")]
    Parse {
        /// Full URL or path
        url: String,

        /// Pattern to match (default: from config)
        #[arg(short, long, conflicts_with = "any")]
        pattern: Option<Pattern>,

        /// Try every pattern and report the first match
        #[arg(short, long)]
        any: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate the article's permalink under every pattern
    #[command(visible_alias = "v")]
    Variations {
        #[command(flatten)]
        article: ArticleArgs,

        /// Base URL (default: site.base_url from config)
        #[arg(short, long, value_hint = clap::ValueHint::Url)]
        base_url: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Article given by flags or as JSON.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ArticleArgs {
    /// Read the article as JSON from a file (`-` for stdin)
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_hint = clap::ValueHint::FilePath,
        conflicts_with_all = ["id", "title", "category", "subcategory", "region", "date", "daily_count", "total_count"]
    )]
    pub json: Option<PathBuf>,

    /// Article id
    #[arg(long, default_value_t = 0)]
    pub id: u64,

    /// Article title
    #[arg(short, long, default_value = "")]
    pub title: String,

    /// Category name
    #[arg(short, long, default_value = "")]
    pub category: String,

    #[arg(long)]
    pub subcategory: Option<String>,

    #[arg(long)]
    pub region: Option<String>,

    /// Publish date, YYYY-MM-DD (default: today)
    #[arg(short, long)]
    pub date: Option<PublishDate>,

    /// Position among the day's articles
    #[arg(long)]
    pub daily_count: Option<u32>,

    /// Position among the category's articles
    #[arg(long)]
    pub total_count: Option<u32>,
}

/// Permalink options; each flag overrides `[url]` in the config.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct UrlArgs {
    /// URL pattern
    #[arg(short, long)]
    pub pattern: Option<Pattern>,

    /// Preset (pattern, title length, count padding)
    #[arg(short = 'P', long)]
    pub preset: Option<UrlPreset>,

    /// Base URL (default: site.base_url from config)
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Maximum title segment length
    #[arg(short = 'm', long, value_parser = length_parser())]
    pub max_title_length: Option<usize>,

    /// Zero-pad counters to three digits
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub count_padding: Option<bool>,

    /// Percent-encode every segment
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub encoded: Option<bool>,

    /// Use `untitled` instead of `article-{id}` for empty titles
    #[arg(long)]
    pub no_fallback: bool,
}

/// Output options for JSON-producing commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_url_command() {
        let cli = Cli::try_parse_from([
            "bnlink",
            "url",
            "--title",
            "নতুন খবর",
            "--category",
            "খেলা",
            "--date",
            "2025-01-26",
            "-p",
            "count-only",
            "--encoded",
        ])
        .unwrap();

        let Commands::Url { article, url, .. } = cli.command else {
            panic!("expected url command");
        };
        assert_eq!(article.title, "নতুন খবর");
        assert_eq!(article.date, Some(PublishDate::new(2025, 1, 26)));
        assert_eq!(url.pattern, Some(Pattern::CountOnly));
        assert_eq!(url.encoded, Some(true));
        assert_eq!(url.count_padding, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Cli::try_parse_from(["bnlink", "url", "-d", "2025-02-30"]).is_err());
        assert!(Cli::try_parse_from(["bnlink", "url", "-p", "by-author"]).is_err());
        assert!(Cli::try_parse_from(["bnlink", "parse", "/x", "-p", "count-only", "--any"]).is_err());
        assert!(Cli::try_parse_from(["bnlink", "url", "--json", "-", "--title", "x"]).is_err());
        assert!(Cli::try_parse_from(["bnlink", "url", "--json", "-", "--id", "5"]).is_err());
    }

    #[test]
    fn test_length_limits_below_minimum_rejected() {
        for value in ["0", "1"] {
            assert!(Cli::try_parse_from(["bnlink", "slug", "খবর", "-m", value]).is_err());
            assert!(Cli::try_parse_from(["bnlink", "url", "-m", value]).is_err());
        }

        let cli = Cli::try_parse_from(["bnlink", "slug", "খবর", "-m", "2"]).unwrap();
        let Commands::Slug { max_length, .. } = cli.command else {
            panic!("expected slug command");
        };
        assert_eq!(max_length, Some(2));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bnlink", "decode", "%E0%A6%95", "-v", "-C", "x.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
