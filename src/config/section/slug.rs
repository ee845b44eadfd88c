//! `[slug]` configuration.

use super::check_length;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::slug::{DEFAULT_MAX_LENGTH, SlugOptions};
use serde::{Deserialize, Serialize};

/// Options for standalone slug generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugSection {
    pub max_length: usize,
    /// Keep Latin letters next to Bengali text.
    pub include_english: bool,
}

impl Default for SlugSection {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            include_english: true,
        }
    }
}

impl SlugSection {
    pub const MAX_LENGTH: FieldPath = FieldPath::new("slug.max_length");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_length(Self::MAX_LENGTH, self.max_length, diag);
    }

    pub fn options(&self) -> SlugOptions {
        SlugOptions::default()
            .with_max_length(self.max_length)
            .with_english(self.include_english)
    }
}
