//! Secret identity.
//!
//! Maps `(project, env, secret id, version)` onto the External Secrets Operator
//! naming convention `{env}-gke-{secret}-secrets`.

use regex::Regex;
use std::fmt;

use super::Env;
use crate::core::types::{ProjectId, SecretId, Version};

/// A fully qualified reference to one version of a managed secret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretRef {
    project_id: ProjectId,
    env: Env,
    secret_id: SecretId,
    version: Version,
}

impl SecretRef {
    /// Create a new reference.
    pub fn new(
        project_id: impl Into<ProjectId>,
        env: Env,
        secret_id: impl Into<SecretId>,
        version: impl Into<Version>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            env,
            secret_id: secret_id.into(),
            version: version.into(),
        }
    }

    /// Same secret, different version.
    pub fn with_version(&self, version: impl Into<Version>) -> Self {
        Self {
            version: version.into(),
            ..self.clone()
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn env(&self) -> Env {
        self.env
    }

    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Resource name in the secret store: `{env}-gke-{secret_id}-secrets`.
    pub fn resource_name(&self) -> String {
        format!("{}-gke-{}-secrets", self.env, self.secret_id)
    }

    /// Human-readable locator: `{project}/{resource_name}:{version}`.
    pub fn locator(&self) -> String {
        format!("{}/{}:{}", self.project_id, self.resource_name(), self.version)
    }
}

impl fmt::Display for SecretRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.locator())
    }
}

/// Extract the secret ids of every `{env}-gke-<id>-secrets` name in `listing`.
///
/// Matches are greedy within a line and returned in listing order.
pub fn extract_names(env: Env, listing: &str) -> Vec<String> {
    let pattern = format!("{}-gke-(.*)-secrets", regex::escape(env.as_str()));
    let Ok(re) = Regex::new(&pattern) else {
        return Vec::new();
    };
    re.captures_iter(listing)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
