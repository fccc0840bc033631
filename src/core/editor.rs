//! External editor.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use crate::error::{EditError, Result};

/// Something that lets the user change a file in place.
pub trait Editor {
    /// Block until the user is done editing `path`.
    fn edit(&self, path: &Path) -> Result<()>;
}

/// The user's editor, e.g. `vi` or `code --wait`.
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    program: PathBuf,
    args: Vec<String>,
}

impl ExternalEditor {
    /// Parse an editor command line using shell word rules.
    ///
    /// # Errors
    ///
    /// Returns `EditError::InvalidEditor` for unbalanced quoting or an empty
    /// command, `EditError::EditorMissing` if the program is not on PATH.
    pub fn from_command_line(command_line: &str) -> Result<Self> {
        let words = shlex::split(command_line)
            .ok_or_else(|| EditError::InvalidEditor(command_line.to_string()))?;
        let Some((program, args)) = words.split_first() else {
            return Err(EditError::InvalidEditor(command_line.to_string()).into());
        };
        let program =
            which::which(program).map_err(|_| EditError::EditorMissing(program.clone()))?;
        Ok(Self {
            program,
            args: args.to_vec(),
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Editor for ExternalEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        info!(editor = %self.program.display(), "opening editor");
        // The editor's exit status is not meaningful; only the file is.
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|source| EditError::EditorSpawn {
                program: self.program.display().to_string(),
                source,
            })?;
        debug!(%status, "editor exited");
        Ok(())
    }
}
