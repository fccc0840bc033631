//! List command.

use crate::core::domain::CommandConfig;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Show the store's version listing for the secret.
pub fn execute(store: &dyn SecretStore, config: &CommandConfig) -> Result<()> {
    store.list_versions(&config.secret())
}
