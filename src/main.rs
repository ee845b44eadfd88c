//! `bnlink`: Bengali slugs and article permalinks from the command line.

use anyhow::Result;
use bangla_permalink::cli::{self, Cli};
use bangla_permalink::config::PermalinkConfig;
use bangla_permalink::logger;
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = PermalinkConfig::load(cli.config.as_deref())?;
    cli::run(&cli, &config)
}
