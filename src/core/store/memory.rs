//! In-memory secret store for workflow tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::Path;

use super::SecretStore;
use crate::core::codec;
use crate::core::domain::SecretRef;
use crate::error::{Result, StoreError};

/// Stores encoded payloads per resource name and counts mutations.
#[derive(Default)]
pub(crate) struct MemoryStore {
    secrets: RefCell<BTreeMap<(String, String), Vec<Vec<u8>>>>,
    failure: RefCell<Option<StoreError>>,
    pub creates: Cell<usize>,
    pub adds: Cell<usize>,
    pub lists: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(secret: &SecretRef) -> (String, String) {
        (secret.project_id().to_string(), secret.resource_name())
    }

    /// Append a version holding `text`.
    pub fn insert(&self, secret: &SecretRef, text: &str) {
        self.insert_raw(secret, codec::encode(text).into_bytes());
    }

    /// Append a version holding raw tool output.
    pub fn insert_raw(&self, secret: &SecretRef, raw: Vec<u8>) {
        self.secrets
            .borrow_mut()
            .entry(Self::key(secret))
            .or_default()
            .push(raw);
    }

    /// Make the next `get_version` fail with `error`.
    pub fn fail_with(&self, error: StoreError) {
        *self.failure.borrow_mut() = Some(error);
    }

    /// Number of versions stored for the secret.
    pub fn version_count(&self, secret: &SecretRef) -> usize {
        self.secrets
            .borrow()
            .get(&Self::key(secret))
            .map_or(0, Vec::len)
    }

    fn read(path: &Path) -> Result<Vec<u8>> {
        let text = std::fs::read_to_string(path)?;
        Ok(codec::encode(&text).into_bytes())
    }
}

impl SecretStore for MemoryStore {
    fn get_version(&self, secret: &SecretRef) -> Result<Vec<u8>> {
        if let Some(error) = self.failure.borrow_mut().take() {
            return Err(error.into());
        }
        let not_found = || StoreError::NotFound {
            locator: secret.locator(),
        };
        let secrets = self.secrets.borrow();
        let versions = secrets.get(&Self::key(secret)).ok_or_else(not_found)?;
        let raw = match secret.version() {
            "latest" => versions.last(),
            n => n
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| versions.get(i)),
        };
        Ok(raw.ok_or_else(not_found)?.clone())
    }

    fn create_secret(&self, secret: &SecretRef, data_file: &Path) -> Result<()> {
        self.creates.set(self.creates.get() + 1);
        let raw = Self::read(data_file)?;
        self.secrets
            .borrow_mut()
            .insert(Self::key(secret), vec![raw]);
        Ok(())
    }

    fn add_version(&self, secret: &SecretRef, data_file: &Path) -> Result<()> {
        self.adds.set(self.adds.get() + 1);
        let raw = Self::read(data_file)?;
        self.insert_raw(secret, raw);
        Ok(())
    }

    fn list_versions(&self, _secret: &SecretRef) -> Result<()> {
        self.lists.set(self.lists.get() + 1);
        Ok(())
    }

    fn list_names(&self, project_id: &str) -> Result<String> {
        Ok(self
            .secrets
            .borrow()
            .keys()
            .filter(|(project, _)| project == project_id)
            .map(|(project, name)| format!("projects/{}/secrets/{}\n", project, name))
            .collect())
    }
}
