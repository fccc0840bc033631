//! Edit workflow.
//!
//! ```text
//! Fetching -> Seeding -> Editing -> Validating -> Retry | Pushing | Unchanged -> Done
//! ```
//!
//! A missing secret is seeded with an empty JSON object and created on push;
//! an existing one gets a new version only if the scratch file's digest changed.

use serde::de::IgnoredAny;
use std::fs::File;
use std::io::BufReader;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::codec::Digest;
use crate::core::constants;
use crate::core::domain::SecretRef;
use crate::core::editor::Editor;
use crate::core::interrupt;
use crate::core::prompt::Prompt;
use crate::core::scratch::ScratchFile;
use crate::core::store::{fetch_text, SecretStore};
use crate::error::{EditError, Result};

/// How an edit session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The secret did not exist and was created.
    Created,
    /// A new version was added.
    Updated,
    /// Content unchanged; nothing pushed.
    Unchanged,
    /// The user gave up on invalid JSON; nothing pushed.
    Abandoned,
}

enum State {
    Editing,
    Validating,
    Pushing,
}

/// Collaborators of one edit.
pub struct EditSession<'a> {
    store: &'a dyn SecretStore,
    editor: &'a dyn Editor,
    prompt: &'a dyn Prompt,
    interrupted: Box<dyn Fn() -> bool + 'a>,
}

impl<'a> EditSession<'a> {
    pub fn new(store: &'a dyn SecretStore, editor: &'a dyn Editor, prompt: &'a dyn Prompt) -> Self {
        Self {
            store,
            editor,
            prompt,
            interrupted: Box::new(interrupt::interrupted),
        }
    }

    /// Replace the Ctrl-C flag consulted after the editor and the prompt return.
    pub fn with_interrupt_check(mut self, check: impl Fn() -> bool + 'a) -> Self {
        self.interrupted = Box::new(check);
        self
    }

    /// Edit `secret` interactively and push the result.
    ///
    /// # Errors
    ///
    /// Store errors other than not-found, decode errors, editor launch failures
    /// and interrupts abort the session. The scratch file is removed in every case.
    pub fn run(&self, secret: &SecretRef) -> Result<EditOutcome> {
        let scratch = ScratchFile::acquire()?;

        let (content, exists) = match fetch_text(self.store, secret) {
            Ok(text) => (text, true),
            Err(e) if e.is_not_found() => {
                info!(secret = %secret, "secret does not exist, seeding default");
                (Zeroizing::new(constants::DEFAULT_SECRET.to_string()), false)
            }
            Err(e) => return Err(e),
        };

        scratch.write(&content)?;
        drop(content);

        let original = if exists { Some(scratch.hash()?) } else { None };
        let outcome = self.drive(secret, &scratch, original)?;

        scratch.release()?;
        Ok(outcome)
    }

    fn drive(
        &self,
        secret: &SecretRef,
        scratch: &ScratchFile,
        original: Option<Digest>,
    ) -> Result<EditOutcome> {
        let mut state = State::Editing;
        loop {
            state = match state {
                State::Editing => {
                    self.editor.edit(scratch.path())?;
                    self.check_interrupt(secret)?;
                    State::Validating
                }
                State::Validating => match validate(scratch) {
                    Ok(()) => match original {
                        Some(before) if scratch.hash()? == before => {
                            debug!(secret = %secret, digest = %before, "content unchanged");
                            return Ok(EditOutcome::Unchanged);
                        }
                        _ => State::Pushing,
                    },
                    Err(error) => {
                        debug!(secret = %secret, %error, "validation failed");
                        let again = self.prompt.retry(&error)?;
                        self.check_interrupt(secret)?;
                        if !again {
                            return Ok(EditOutcome::Abandoned);
                        }
                        State::Editing
                    }
                },
                State::Pushing => {
                    return if original.is_some() {
                        self.store.add_version(secret, scratch.path())?;
                        info!(secret = %secret, "pushed new version");
                        Ok(EditOutcome::Updated)
                    } else {
                        self.store.create_secret(secret, scratch.path())?;
                        info!(secret = %secret, "created secret");
                        Ok(EditOutcome::Created)
                    };
                }
            };
        }
    }

    fn check_interrupt(&self, secret: &SecretRef) -> Result<()> {
        if (self.interrupted)() {
            return Err(EditError::Interrupted {
                locator: secret.locator(),
            }
            .into());
        }
        Ok(())
    }
}

/// Parse the scratch file as JSON without keeping the value.
fn validate(scratch: &ScratchFile) -> std::result::Result<(), serde_json::Error> {
    let file = File::open(scratch.path()).map_err(serde_json::Error::io)?;
    serde_json::from_reader::<_, IgnoredAny>(BufReader::new(file))?;
    Ok(())
}
