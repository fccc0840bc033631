//! gsm - edit, view, list and diff Google Secret Manager secrets named for
//! External Secrets Operator (`{env}-gke-{secret}-secrets`).
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── edit          # Edit a secret in $EDITOR and push it
//! │   ├── view          # Print a secret version
//! │   ├── list          # Show the store's version listing
//! │   ├── names         # List managed secret ids for an env
//! │   ├── diff          # Unified diff between two versions
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── domain/       # SecretRef, Env, CommandConfig
//!     ├── codec         # Payload decoding and content hashing
//!     ├── store/        # SecretStore trait and gcloud gateway
//!     ├── scratch       # Temporary file session
//!     ├── edit          # Edit workflow
//!     ├── diff          # Diff engine and workflow
//!     └── config        # Settings file and environment overrides
//! ```
//!
//! All store access goes through the `gcloud` CLI; there is no API client.

pub mod cli;
pub mod core;
pub mod error;
