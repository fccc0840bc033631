//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, added diff lines
//! - Red: errors, removed diff lines
//! - Cyan: secret locators, hints, hunk headers
//! - Bold: diff file headers
//! - Dimmed: secondary info

use console::{style, StyledObject};

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Render `styled`, or its plain content when colors are off.
fn paint<D: std::fmt::Display>(styled: StyledObject<D>) -> String {
    if colors_enabled() {
        styled.to_string()
    } else {
        styled.force_styling(false).to_string()
    }
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ created proj/dev-gke-app-secrets:latest`
pub fn success(msg: &str) {
    println!("{} {}", paint(style("✓").green()), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ secret not found`
pub fn error(msg: &str) {
    eprintln!("{} {}", paint(style("✗").red()), msg);
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ install the Google Cloud SDK`
pub fn hint(msg: &str) {
    eprintln!("{} {}", paint(style("→").cyan()), paint(style(msg).cyan()));
}

/// Print secondary information.
pub fn dimmed(msg: &str) {
    println!("{}", paint(style(msg).dim()));
}

/// Format a secret locator or key name in cyan.
pub fn key(k: &str) -> String {
    paint(style(k).cyan())
}

/// Diff file header line.
pub fn diff_header(line: &str) -> String {
    paint(style(line).bold())
}

/// Diff hunk range line.
pub fn diff_range(line: &str) -> String {
    paint(style(line).cyan())
}

/// Added diff line.
pub fn diff_added(line: &str) -> String {
    paint(style(line).green())
}

/// Removed diff line.
pub fn diff_removed(line: &str) -> String {
    paint(style(line).red())
}
