//! Edit command.

use tracing::info;

use crate::cli::output;
use crate::cli::prompt::TerminalPrompt;
use crate::core::config::Settings;
use crate::core::domain::CommandConfig;
use crate::core::edit::{EditOutcome, EditSession};
use crate::core::editor::ExternalEditor;
use crate::core::interrupt;
use crate::core::store::SecretStore;
use crate::error::{EditError, Result};

/// Open the secret in the user's editor and push the result.
pub fn execute(store: &dyn SecretStore, settings: &Settings, config: &CommandConfig) -> Result<()> {
    let secret = config.secret();
    info!(secret = %secret, "editing secret");

    let editor = ExternalEditor::from_command_line(&settings.editor)?;
    interrupt::install()?;

    let outcome = EditSession::new(store, &editor, &TerminalPrompt).run(&secret)?;
    let locator = secret.locator();
    match outcome {
        EditOutcome::Created => output::success(&format!("created {}", output::key(&locator))),
        EditOutcome::Updated => {
            output::success(&format!("pushed new version of {}", output::key(&locator)))
        }
        EditOutcome::Unchanged => output::dimmed("no changes, not pushing new version"),
        EditOutcome::Abandoned => return Err(EditError::Unvalidated { locator }.into()),
    }
    Ok(())
}
