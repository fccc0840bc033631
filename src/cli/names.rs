//! Names command.

use crate::core::domain::CommandConfig;
use crate::core::store::{secret_names, SecretStore};
use crate::error::Result;

/// Print the id of every managed secret in the environment, one per line.
pub fn execute(store: &dyn SecretStore, config: &CommandConfig) -> Result<()> {
    for name in secret_names(store, &config.project_id, config.env)? {
        println!("{}", name);
    }
    Ok(())
}
