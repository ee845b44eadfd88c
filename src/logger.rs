//! Logging with colored module prefixes.
//!
//! ```ignore
//! log!("config"; "using {}", path.display());
//! debug!("parse"; "trying {}", pattern);   // only with --verbose
//! ```
//!
//! Everything goes to stderr; stdout carries command output only.

use owo_colors::{AnsiColors, OwoColorize, Stream, Style};
use std::{
    io::{Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module, &module.to_ascii_lowercase());
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
///
/// Honors `--color` through `owo_colors::set_override`.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let color = match module_lower {
        "config" => AnsiColors::BrightBlue,
        "parse" => AnsiColors::BrightGreen,
        "error" => AnsiColors::BrightRed,
        "warning" | "hint" => AnsiColors::BrightMagenta,
        _ => AnsiColors::BrightYellow,
    };
    let style = Style::new().color(color).bold();
    let prefix = format!("[{module}]");
    prefix
        .if_supports_color(Stream::Stderr, |p| p.style(style))
        .to_string()
}
