//! Parsed command configuration.

use super::{Env, SecretRef};
use crate::core::constants;
use crate::core::types::{ProjectId, SecretId, Version};

/// The action requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Edit,
    View,
    List,
    Names,
    Diff,
}

/// Everything a workflow needs from the command line. Built once, read-only after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    pub action: Action,
    pub project_id: ProjectId,
    pub env: Env,
    pub secret_id: Option<SecretId>,
    pub version: Option<Version>,
    /// Versions compared by `diff`.
    pub compare: Option<(Version, Version)>,
}

impl CommandConfig {
    /// Secret reference with defaults applied for omitted id and version.
    pub fn secret(&self) -> SecretRef {
        SecretRef::new(
            self.project_id.clone(),
            self.env,
            self.secret_id
                .clone()
                .unwrap_or_else(|| constants::DEFAULT_SECRET_ID.to_string()),
            self.version
                .clone()
                .unwrap_or_else(|| constants::DEFAULT_VERSION.to_string()),
        )
    }
}
