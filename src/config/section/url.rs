//! `[url]` configuration.
//!
//! Every key is optional. Unset keys fall back to the preset, then to the
//! built-in defaults.

use super::check_length;
use crate::config::util::update_option;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::permalink::{Pattern, UrlOptions, UrlPreset};
use serde::{Deserialize, Serialize};

/// Permalink layout and generation options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlSection {
    /// Named option bundle applied before the explicit keys below.
    pub preset: Option<UrlPreset>,
    pub pattern: Option<Pattern>,
    pub max_title_length: Option<usize>,
    pub category_max_length: Option<usize>,
    pub count_padding: Option<bool>,
    pub encoded: Option<bool>,
    pub fallback_to_id: Option<bool>,
}

impl UrlSection {
    pub const MAX_TITLE_LENGTH: FieldPath = FieldPath::new("url.max_title_length");
    pub const CATEGORY_MAX_LENGTH: FieldPath = FieldPath::new("url.category_max_length");
    pub const PRESET: FieldPath = FieldPath::new("url.preset");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(n) = self.max_title_length {
            check_length(Self::MAX_TITLE_LENGTH, n, diag);
        }
        if let Some(n) = self.category_max_length {
            check_length(Self::CATEGORY_MAX_LENGTH, n, diag);
        }
        if let (Some(preset), Some(pattern)) = (self.preset, self.pattern)
            && preset.options().pattern != pattern
        {
            diag.warn(
                Self::PRESET,
                format!("pattern `{pattern}` overrides the `{preset}` preset layout"),
            );
        }
    }

    /// Resolve to [`UrlOptions`]: defaults < preset < explicit keys.
    pub fn options(&self, base_url: &str) -> UrlOptions {
        let mut options = self
            .preset
            .map(UrlPreset::options)
            .unwrap_or_default()
            .with_base_url(base_url);

        update_option(&mut options.pattern, self.pattern.as_ref());
        update_option(&mut options.max_title_length, self.max_title_length.as_ref());
        update_option(
            &mut options.category_max_length,
            self.category_max_length.as_ref(),
        );
        update_option(&mut options.use_count_padding, self.count_padding.as_ref());
        update_option(&mut options.encoded, self.encoded.as_ref());
        update_option(&mut options.fallback_to_id, self.fallback_to_id.as_ref());
        options
    }
}
