//! `[site]` configuration.

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::permalink::url_path_prefix;
use serde::{Deserialize, Serialize};

/// Where generated permalinks live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site URL, path used as prefix (e.g., "https://example.com/bn").
    pub base_url: Option<String>,
}

impl SiteSection {
    pub const BASE_URL: FieldPath = FieldPath::new("site.base_url");

    /// Validate site configuration.
    ///
    /// `base_url` must be an absolute `http`/`https` URL with a host.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let Some(url_str) = &self.base_url else {
            return;
        };

        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::BASE_URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://bengali-news.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::BASE_URL,
                        "URL must have a valid host",
                        "use format like https://bengali-news.com",
                    );
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.warn(Self::BASE_URL, "query string and fragment are kept verbatim");
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::BASE_URL,
                    format!("invalid URL: {e}"),
                    "use format like https://bengali-news.com",
                );
            }
        }
    }

    /// Base URL for generated links, empty when unset.
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or_default()
    }

    /// Path below the domain root the site is served from (`bn` for
    /// `https://x.com/bn/`), empty at the root.
    pub fn path_prefix(&self) -> String {
        self.base_url
            .as_deref()
            .and_then(url_path_prefix)
            .unwrap_or_default()
    }
}
