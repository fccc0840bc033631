//! Validation retry prompt.

use crate::error::Result;

/// Asks whether to reopen the editor after invalid content.
pub trait Prompt {
    /// Report `error` and return `true` to edit again.
    fn retry(&self, error: &serde_json::Error) -> Result<bool>;
}

/// Empty input or `Y` means retry; anything else declines.
pub fn wants_retry(answer: &str) -> bool {
    let answer = answer.trim_end_matches(['\r', '\n']);
    answer.is_empty() || answer == "Y"
}
