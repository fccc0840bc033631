//! Command helper methods for Test.

use super::{Test, PROJECT};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a gsm command wired to the fake tools.
    ///
    /// Returns a Command configured with:
    /// - GSM_GCLOUD and EDITOR pointing at the fake scripts
    /// - HOME and XDG_CONFIG_HOME set to the temporary home directory
    /// - TMPDIR set to a private scratch directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("gsm").expect("failed to find gsm binary");
        cmd.env("GSM_GCLOUD", self.gcloud())
            .env("EDITOR", self.editor())
            .env("FAKE_GCLOUD_STATE", self.state())
            .env("FAKE_EDITOR_DIR", self.editor_dir())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("TMPDIR", self.tmp())
            .env("NO_COLOR", "1")
            .env_remove("GSM_CONFIG")
            .env_remove("GSM_LOG")
            .env_remove("GSM_NOT_FOUND_CODES")
            .current_dir(self.dir.path());
        cmd
    }

    /// Run `gsm <command> -p proj -e <env> <extra...>`.
    pub fn run(&self, command: &str, env: &str, extra: &[&str]) -> Output {
        self.cmd()
            .args([command, "-p", PROJECT, "-e", env])
            .args(extra)
            .output()
            .expect("failed to run gsm")
    }

    /// Shortcut for `gsm edit`, answering the retry prompt with `answers`.
    pub fn edit(&self, env: &str, extra: &[&str], answers: &str) -> Output {
        self.cmd()
            .args(["edit", "-p", PROJECT, "-e", env])
            .args(extra)
            .write_stdin(answers)
            .output()
            .expect("failed to run gsm edit")
    }

    /// Shortcut for `gsm view`.
    pub fn view(&self, env: &str, extra: &[&str]) -> Output {
        self.run("view", env, extra)
    }

    /// Shortcut for `gsm list`.
    pub fn list(&self, env: &str, extra: &[&str]) -> Output {
        self.run("list", env, extra)
    }

    /// Shortcut for `gsm names`.
    pub fn names(&self, env: &str) -> Output {
        self.run("names", env, &[])
    }

    /// Shortcut for `gsm diff`.
    pub fn diff(&self, env: &str, extra: &[&str]) -> Output {
        self.run("diff", env, extra)
    }
}
