//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR and non-TTY output):
//! - Green: success
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: keys, paths, hints
//! - Dimmed: secondary info

use std::fmt::Display;

use console::style;

/// Print a success message with checkmark (green).
///
/// Example: `✓ rendered 3 secrets`
pub fn success(msg: &str) {
    eprintln!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ invalid YAML document`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ expected 'locator:OUTPUT_KEY'`
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  DB_PASS  projects/p/secrets/s/versions/1`
pub fn kv(label: &str, value: impl Display) {
    eprintln!("  {}  {}", style(label).cyan(), style(value).bold());
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    eprintln!("{}", style(msg).dim());
}
