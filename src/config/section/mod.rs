//! Configuration section definitions.
//!
//! Each module corresponds to a section in `permalink.toml`:
//!
//! | Module | TOML Section | Purpose                                  |
//! |--------|--------------|------------------------------------------|
//! | `site` | `[site]`     | Base URL and deployment path prefix      |
//! | `url`  | `[url]`      | Pattern, preset and permalink options    |
//! | `slug` | `[slug]`     | Options for the standalone `slug` command |

mod site;
mod slug;
mod url;

pub use site::SiteSection;
pub use slug::SlugSection;
pub use url::UrlSection;

use super::{ConfigDiagnostics, FieldPath};
use crate::slug::MIN_SLUG_CHARS;

/// Minimum value accepted for any length limit.
pub const MIN_LENGTH: usize = MIN_SLUG_CHARS;

/// Report a length limit below [`MIN_LENGTH`].
pub(super) fn check_length(field: FieldPath, value: usize, diag: &mut ConfigDiagnostics) {
    if value < MIN_LENGTH {
        diag.error_with_hint(
            field,
            format!("length limit {value} is too small"),
            format!("{field} must be at least {MIN_LENGTH}"),
        );
    }
}
