//! Constants used throughout gsm.
//!
//! Centralizes magic strings and default values.

/// Payload seeded into the editor when the secret does not exist yet.
pub const DEFAULT_SECRET: &str = "{\n}\n";

/// Secret identifier used when `--secret` is omitted.
pub const DEFAULT_SECRET_ID: &str = "app";

/// Version selector used when `--version` is omitted.
pub const DEFAULT_VERSION: &str = "latest";

/// Editor used when neither `EDITOR` nor the settings file name one.
pub const DEFAULT_EDITOR: &str = "vi";

/// Secret-management tool invoked for every store operation.
pub const DEFAULT_GCLOUD: &str = "gcloud";

/// Exit codes the tool uses to say "no such secret or version".
pub const DEFAULT_NOT_FOUND_CODES: &[i32] = &[1];

/// Block size used when hashing scratch files.
pub const HASH_BLOCK_SIZE: usize = 4096;

/// Lines of context around each diff hunk.
pub const DIFF_CONTEXT: usize = 3;

/// Settings file name inside the `gsm` config directory.
pub const CONFIG_FILE: &str = "config.toml";
