//! Bengali slug codec.
//!
//! - [`generate`]: title → path segment (`generate_slug`, `generate_ascii_slug`)
//! - [`codec`]: percent handling (`encode_slug`, `decode_slug`)
//!
//! Nothing here fails: unusable input degrades to `untitled`,
//! `article-{id}`, or the input itself.

mod codec;
mod generate;

pub use codec::{decode_slug, encode_slug};
pub use generate::{generate_ascii_slug, generate_slug};

/// Default slug length limit, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Shortest slug worth keeping, in characters. Smaller length limits are
/// raised to this.
pub const MIN_SLUG_CHARS: usize = 2;

/// Options for [`generate_slug`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugOptions {
    /// Upper bound on the slug length in characters, at least
    /// [`MIN_SLUG_CHARS`].
    pub max_length: usize,
    /// Keep ASCII Latin letters (otherwise they are stripped).
    pub include_english: bool,
    /// Id used for the `article-{id}` fallback; `untitled` when absent.
    pub fallback_id: Option<u64>,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            include_english: true,
            fallback_id: None,
        }
    }
}

impl SlugOptions {
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_english(mut self, include_english: bool) -> Self {
        self.include_english = include_english;
        self
    }

    pub fn with_fallback_id(mut self, id: u64) -> Self {
        self.fallback_id = Some(id);
        self
    }
}
