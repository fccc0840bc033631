//! Diff command.

use crate::cli::output;
use crate::core::diff::{diff_versions, UnifiedDiff};
use crate::core::domain::CommandConfig;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Print a colored unified diff between two versions.
pub fn execute(store: &dyn SecretStore, config: &CommandConfig) -> Result<()> {
    let Some((version_a, version_b)) = &config.compare else {
        return Ok(());
    };
    let diff = diff_versions(store, &config.secret(), version_a, version_b)?;
    if diff.is_empty() {
        output::dimmed(&no_differences(&diff));
        return Ok(());
    }
    print!("{}", render(&diff));
    Ok(())
}

fn no_differences(diff: &UnifiedDiff) -> String {
    format!(
        "no differences between `{}` and `{}`",
        diff.from_label(),
        diff.to_label()
    )
}

/// Colorize the plain unified diff line by line.
fn render(diff: &UnifiedDiff) -> String {
    let plain = diff.to_string();
    let mut out = String::with_capacity(plain.len());
    let mut lines = plain.lines();

    for header in lines.by_ref().take(2) {
        out.push_str(&output::diff_header(header));
        out.push('\n');
    }
    for line in lines {
        let styled = match line.as_bytes().first() {
            Some(b'@') => output::diff_range(line),
            Some(b'+') => output::diff_added(line),
            Some(b'-') => output::diff_removed(line),
            _ => line.to_string(),
        };
        out.push_str(&styled);
        out.push('\n');
    }
    out
}
