//! Scratch file session.
//!
//! One temporary file per edit. The file is removed when the [`ScratchFile`]
//! is dropped, so every exit path (success, validation failure, store error,
//! interrupt unwinding) releases it.

use chrono::{DateTime, Utc};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::core::codec::{self, Digest};
use crate::error::Result;

/// Exclusively owned temporary file holding secret content during an edit.
#[derive(Debug)]
pub struct ScratchFile {
    file: NamedTempFile,
    created_at: DateTime<Utc>,
}

impl ScratchFile {
    /// Create a new empty scratch file in the system temp directory.
    pub fn acquire() -> Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("gsm-")
            .suffix(".json")
            .tempfile()?;
        debug!(path = %file.path().display(), "acquired scratch file");
        Ok(Self {
            file,
            created_at: Utc::now(),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replace the file's content.
    pub fn write(&self, content: &str) -> Result<()> {
        std::fs::write(self.path(), content)?;
        Ok(())
    }

    /// Read the current content.
    pub fn read(&self) -> Result<String> {
        Ok(std::fs::read_to_string(self.path())?)
    }

    /// Digest of the current content.
    pub fn hash(&self) -> Result<Digest> {
        Ok(codec::hash_file(self.path())?)
    }

    /// Delete the file now, reporting failures instead of ignoring them.
    pub fn release(self) -> Result<()> {
        let path = self.path().to_path_buf();
        let age = Utc::now() - self.created_at;
        match self.file.close() {
            Ok(()) => {
                debug!(path = %path.display(), held_ms = age.num_milliseconds(), "released scratch file");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "scratch file already removed");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
