//! View command.

use std::io::Write;

use crate::core::domain::CommandConfig;
use crate::core::store::{fetch_text, SecretStore};
use crate::error::Result;

/// Print the decoded secret.
pub fn execute(store: &dyn SecretStore, config: &CommandConfig) -> Result<()> {
    let text = fetch_text(store, &config.secret())?;
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
