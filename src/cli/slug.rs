//! `slug`, `encode` and `decode` commands.

use anyhow::Result;

use crate::config::PermalinkConfig;
use crate::debug;
use crate::slug::{SlugOptions, decode_slug, encode_slug, generate_ascii_slug, generate_slug};

use super::output::write_text;

/// Flags of the `slug` command.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct SlugFlags {
    pub max_length: Option<usize>,
    pub no_english: bool,
    pub fallback_id: Option<u64>,
    pub ascii: bool,
}

pub(super) fn run_slug(title: &str, flags: SlugFlags, config: &PermalinkConfig) -> Result<()> {
    let options = slug_options(flags, config);
    debug!("slug"; "{:?}", options);

    let slug = if flags.ascii {
        generate_ascii_slug(title, &options)
    } else {
        generate_slug(title, &options)
    };
    write_text(&slug, None)
}

pub(super) fn run_encode(slug: &str, display: bool) -> Result<()> {
    write_text(&encode_slug(slug, display), None)
}

pub(super) fn run_decode(encoded: &str) -> Result<()> {
    write_text(&decode_slug(encoded), None)
}

/// Config `[slug]` section, then command-line flags.
fn slug_options(flags: SlugFlags, config: &PermalinkConfig) -> SlugOptions {
    let mut options = config.slug_options();
    if let Some(max_length) = flags.max_length {
        options = options.with_max_length(max_length);
    }
    if flags.no_english {
        options = options.with_english(false);
    }
    if let Some(id) = flags.fallback_id {
        options = options.with_fallback_id(id);
    }
    options
}
