//! `permalink.toml` configuration.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site], [url], [slug]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file lookup, option overrides
//! └── mod.rs         # PermalinkConfig (this file)
//! ```
//!
//! A missing file is not an error: every key has a built-in default.

pub mod section;
pub mod types;
mod util;

pub use section::{SiteSection, SlugSection, UrlSection};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, update_option};

use crate::permalink::UrlOptions;
use crate::slug::SlugOptions;
use crate::{debug, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched upward from the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "permalink.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing `permalink.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermalinkConfig {
    /// Path of the loaded file, `None` for built-in defaults
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub url: UrlSection,

    #[serde(default)]
    pub slug: SlugSection,
}

impl PermalinkConfig {
    /// Load and validate the configuration.
    ///
    /// An explicit path must exist. Without one, `permalink.toml` is searched
    /// upward from the working directory and defaults are used when none is
    /// found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => find_config_file(Path::new(DEFAULT_CONFIG_NAME)),
        };

        let config = match path {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.config_path = Some(path);
                config
            }
            None => {
                debug!("config"; "no {} found, using defaults", DEFAULT_CONFIG_NAME);
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Validate every section, reporting all problems at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.url.validate(&mut diag);
        self.slug.validate(&mut diag);

        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    /// Permalink options: defaults < preset < explicit `[url]` keys.
    pub fn url_options(&self) -> UrlOptions {
        self.url.options(self.site.base_url())
    }

    /// Options for the standalone `slug` command.
    pub fn slug_options(&self) -> SlugOptions {
        self.slug.options()
    }

    /// Deployment path prefix taken from `site.base_url`.
    pub fn path_prefix(&self) -> String {
        self.site.path_prefix()
    }
}

// ============================================================================
// tests
// ============================================================================

/// Parse a config for tests, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> PermalinkConfig {
    let (config, ignored) = PermalinkConfig::parse_with_ignored(content).unwrap();
    assert!(ignored.is_empty(), "unknown fields: {ignored:?}");
    config
}
