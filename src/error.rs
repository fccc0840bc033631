//! Error types.
//!
//! Every fallible operation returns [`Result`]. Domain errors are grouped by
//! the layer that raises them and folded into [`Error`] at the workflow boundary.

use thiserror::Error;

/// Top-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Payload returned by the secret store could not be turned into text.
    #[error("cannot decode payload of `{locator}`: {source}")]
    Payload {
        locator: String,
        #[source]
        source: CodecError,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    /// Whether this is the recoverable "secret or version does not exist" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(StoreError::NotFound { .. }))
    }
}

/// Failures talking to the external secret-management tool.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("secret not found: `{locator}`")]
    NotFound { locator: String },

    /// Non-zero exit other than a not-found code. `detail` carries the tool's
    /// stderr untouched.
    #[error("{program} {operation} failed for `{locator}` ({status}){detail}")]
    Tool {
        program: String,
        operation: &'static str,
        locator: String,
        status: String,
        detail: String,
    },

    #[error("{0} not found on PATH")]
    ToolMissing(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Payload decoding failures.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Edit session failures.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("unable to validate JSON for `{locator}`; nothing pushed")]
    Unvalidated { locator: String },

    #[error("editor not found: {0}")]
    EditorMissing(String),

    #[error("invalid editor command: {0:?}")]
    InvalidEditor(String),

    #[error("failed to launch editor {program}: {source}")]
    EditorSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("interrupted; edit of `{locator}` abandoned")]
    Interrupted { locator: String },
}

/// Settings file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    Missing(String),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
