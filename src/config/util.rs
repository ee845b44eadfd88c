//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`.
///
/// ```text
/// /home/editor/newsroom/drafts/   ← cwd
/// /home/editor/newsroom/permalink.toml   ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start`.
pub fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Overwrite `target` when the override is present.
#[inline]
pub fn update_option<T: Clone>(target: &mut T, value: Option<&T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

// ============================================================================
// tests
// ============================================================================
