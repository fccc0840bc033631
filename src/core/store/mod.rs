//! Secret store gateway.
//!
//! The secret store is an external service reached only through its
//! command-line tool. [`SecretStore`] is the seam workflows depend on;
//! [`Gcloud`] is the subprocess implementation.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `SecretStore` trait
//! 2. Map "no such secret or version" on reads to `StoreError::NotFound`
//! 3. Surface every other failure as `StoreError::Tool` with the tool's output

use std::path::Path;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::codec;
use crate::core::domain::{extract_names, Env, SecretRef};
use crate::error::{Error, Result};

mod gcloud;

#[cfg(test)]
pub(crate) mod memory;

pub use gcloud::Gcloud;

/// Operations exposed by the external secret store.
pub trait SecretStore {
    /// Raw payload of one secret version, still encoded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when the secret or version does not exist,
    /// `StoreError::Tool` for any other failure.
    fn get_version(&self, secret: &SecretRef) -> Result<Vec<u8>>;

    /// Create the secret container and its first version from `data_file`.
    ///
    /// # Errors
    ///
    /// Any failure is `StoreError::Tool`, never `NotFound`.
    fn create_secret(&self, secret: &SecretRef, data_file: &Path) -> Result<()>;

    /// Append a version to an existing secret from `data_file`. Failures as for
    /// [`SecretStore::create_secret`].
    fn add_version(&self, secret: &SecretRef, data_file: &Path) -> Result<()>;

    /// Show the store's own version listing for the secret.
    fn list_versions(&self, secret: &SecretRef) -> Result<()>;

    /// Full resource names of every secret in the project, one per line.
    fn list_names(&self, project_id: &str) -> Result<String>;
}

/// Fetch a version and decode it to text.
///
/// # Errors
///
/// Propagates store errors unchanged; decode failures become `Error::Payload`
/// naming the secret's locator.
pub fn fetch_text(store: &dyn SecretStore, secret: &SecretRef) -> Result<Zeroizing<String>> {
    let raw = Zeroizing::new(store.get_version(secret)?);
    let text = codec::decode(&raw).map_err(|source| Error::Payload {
        locator: secret.locator(),
        source,
    })?;
    debug!(secret = %secret, len = text.len(), "fetched secret");
    Ok(text)
}

/// Secret ids of every managed secret for `env` in the project.
pub fn secret_names(store: &dyn SecretStore, project_id: &str, env: Env) -> Result<Vec<String>> {
    let listing = store.list_names(project_id)?;
    let names = extract_names(env, &listing);
    debug!(project = project_id, %env, count = names.len(), "listed secret names");
    Ok(names)
}
