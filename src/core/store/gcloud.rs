//! Google Secret Manager through the gcloud CLI.
//!
//! ## Requirements
//!
//! - `gcloud` CLI must be installed and authenticated
//! - User must have secretmanager access on the target project
//!
//! Every call has the shape `gcloud --project <project> secrets ...`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tracing::{debug, trace};

use super::SecretStore;
use crate::core::domain::SecretRef;
use crate::error::{Result, StoreError};

/// Secret store backed by the gcloud CLI.
#[derive(Debug, Clone)]
pub struct Gcloud {
    /// Resolved program path.
    program: PathBuf,
    /// Program as configured, for messages.
    name: String,
    /// Exit codes meaning "secret or version not found".
    not_found_codes: Vec<i32>,
}

impl Gcloud {
    /// Locate `program` on PATH.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ToolMissing` if the program cannot be found.
    pub fn new(program: &str, not_found_codes: Vec<i32>) -> Result<Self> {
        let resolved =
            which::which(program).map_err(|_| StoreError::ToolMissing(program.to_string()))?;
        debug!(program = %resolved.display(), ?not_found_codes, "using secret store tool");
        Ok(Self {
            program: resolved,
            name: program.to_string(),
            not_found_codes,
        })
    }

    /// `gcloud --project <project> secrets`
    fn command(&self, project_id: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--project").arg(project_id).arg("secrets");
        cmd.stdin(Stdio::null());
        cmd
    }

    /// Run with captured output.
    fn capture(&self, mut cmd: Command) -> Result<Output> {
        trace!(command = ?cmd, "running");
        cmd.stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| {
                StoreError::Spawn {
                    program: self.name.clone(),
                    source,
                }
                .into()
            })
    }

    fn is_not_found(&self, code: Option<i32>) -> bool {
        code.is_some_and(|c| self.not_found_codes.contains(&c))
    }

    /// Classify a finished read. Not-found codes map to `StoreError::NotFound`.
    fn check_read(
        &self,
        status: std::process::ExitStatus,
        stderr: &[u8],
        operation: &'static str,
        secret: &SecretRef,
    ) -> Result<()> {
        if !status.success() && self.is_not_found(status.code()) {
            debug!(secret = %secret, operation, "not found");
            return Err(StoreError::NotFound {
                locator: secret.locator(),
            }
            .into());
        }
        self.check(status, stderr, operation, secret)
    }

    /// Classify a finished invocation. Every failure is a tool error.
    fn check(
        &self,
        status: std::process::ExitStatus,
        stderr: &[u8],
        operation: &'static str,
        secret: &SecretRef,
    ) -> Result<()> {
        if status.success() {
            return Ok(());
        }
        Err(StoreError::Tool {
            program: self.name.clone(),
            operation,
            locator: secret.locator(),
            status: status.to_string(),
            detail: detail(stderr),
        }
        .into())
    }
}

/// Tool stderr formatted as a message suffix.
fn detail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let text = text.trim_end();
    if text.is_empty() {
        String::new()
    } else {
        format!(":\n{}", text)
    }
}

impl SecretStore for Gcloud {
    fn get_version(&self, secret: &SecretRef) -> Result<Vec<u8>> {
        let mut cmd = self.command(secret.project_id());
        cmd.args(["versions", "access", secret.version()])
            .arg("--secret")
            .arg(secret.resource_name())
            .arg("--format=get(payload.data)");

        let output = self.capture(cmd)?;
        self.check_read(output.status, &output.stderr, "versions access", secret)?;
        trace!(secret = %secret, len = output.stdout.len(), "accessed version");
        Ok(output.stdout)
    }

    fn create_secret(&self, secret: &SecretRef, data_file: &Path) -> Result<()> {
        let mut cmd = self.command(secret.project_id());
        cmd.arg("create")
            .arg(secret.resource_name())
            .arg("--data-file")
            .arg(data_file);

        let output = self.capture(cmd)?;
        self.check(output.status, &output.stderr, "create", secret)?;
        debug!(secret = %secret, "created secret");
        Ok(())
    }

    fn add_version(&self, secret: &SecretRef, data_file: &Path) -> Result<()> {
        let mut cmd = self.command(secret.project_id());
        cmd.args(["versions", "add"])
            .arg(secret.resource_name())
            .arg("--data-file")
            .arg(data_file);

        let output = self.capture(cmd)?;
        self.check(output.status, &output.stderr, "versions add", secret)?;
        debug!(secret = %secret, "added version");
        Ok(())
    }

    fn list_versions(&self, secret: &SecretRef) -> Result<()> {
        let mut cmd = self.command(secret.project_id());
        cmd.args(["versions", "list"]).arg(secret.resource_name());

        // Listing goes straight to the terminal.
        trace!(command = ?cmd, "running");
        let status = cmd.status().map_err(|source| StoreError::Spawn {
            program: self.name.clone(),
            source,
        })?;
        self.check_read(status, &[], "versions list", secret)
    }

    fn list_names(&self, project_id: &str) -> Result<String> {
        let mut cmd = self.command(project_id);
        cmd.args(["list", "--format=get(name)"]);

        let output = self.capture(cmd)?;
        if !output.status.success() {
            return Err(StoreError::Tool {
                program: self.name.clone(),
                operation: "list",
                locator: project_id.to_string(),
                status: output.status.to_string(),
                detail: detail(&output.stderr),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
