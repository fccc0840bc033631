//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A GCP project id (e.g., `moz-fx-testapp1-nonprod`).
pub type ProjectId = String;

/// The variable part of a managed secret name (`app` in `dev-gke-app-secrets`).
pub type SecretId = String;

/// A version selector: a version number or the literal `latest`.
pub type Version = String;
