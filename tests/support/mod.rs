//! Test support utilities for gsm integration tests.
//!
//! Every test gets a private fake `gcloud` and fake editor backed by temp
//! directories, so no real project or terminal is touched.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PROJECT: &str = "proj";

const FAKE_GCLOUD: &str = include_str!("bin/gcloud");
const FAKE_EDITOR: &str = include_str!("bin/editor");

/// Test environment with isolated temp directories.
pub struct Test {
    /// Fake tools, secret state, scratch space
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new environment with an empty secret store.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        let t = Self { dir, home };

        for sub in ["bin", "state", "editor/edits", "tmp"] {
            std::fs::create_dir_all(t.dir.path().join(sub)).expect("failed to create dir");
        }
        install_script(&t.gcloud(), FAKE_GCLOUD);
        install_script(&t.editor(), FAKE_EDITOR);
        t
    }

    /// Create an environment with `name` already holding `versions`, oldest first.
    pub fn with_secret(name: &str, versions: &[&str]) -> Self {
        let t = Self::new();
        t.seed(name, versions);
        t
    }

    pub fn gcloud(&self) -> PathBuf {
        self.dir.path().join("bin/gcloud")
    }

    pub fn editor(&self) -> PathBuf {
        self.dir.path().join("bin/editor")
    }

    pub fn state(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    pub fn editor_dir(&self) -> PathBuf {
        self.dir.path().join("editor")
    }

    pub fn tmp(&self) -> PathBuf {
        self.dir.path().join("tmp")
    }

    /// Store versions of `name` in the fake project.
    pub fn seed(&self, name: &str, versions: &[&str]) {
        let dir = self.state().join(PROJECT).join(name);
        std::fs::create_dir_all(&dir).expect("failed to create secret dir");
        let start = self.versions(name).len();
        for (i, content) in versions.iter().enumerate() {
            std::fs::write(dir.join((start + i + 1).to_string()), content)
                .expect("failed to seed version");
        }
    }

    /// Plaintext of every stored version of `name`, oldest first.
    pub fn versions(&self, name: &str) -> Vec<String> {
        let dir = self.state().join(PROJECT).join(name);
        let mut numbered: Vec<(usize, String)> = match std::fs::read_dir(&dir) {
            Ok(entries) => entries
                .map(|e| {
                    let e = e.expect("failed to read entry");
                    let n = e.file_name().to_string_lossy().parse().expect("bad version");
                    (n, std::fs::read_to_string(e.path()).expect("failed to read version"))
                })
                .collect(),
            Err(_) => Vec::new(),
        };
        numbered.sort();
        numbered.into_iter().map(|(_, content)| content).collect()
    }

    /// Arguments of every fake gcloud call, one string per call.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.state().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Queue the content the editor saves on its `n`th launch (1-based).
    pub fn queue_edit(&self, n: usize, content: &str) {
        std::fs::write(self.editor_dir().join("edits").join(n.to_string()), content)
            .expect("failed to queue edit");
    }

    /// What the editor found in the file on its `n`th launch.
    pub fn seen(&self, n: usize) -> String {
        std::fs::read_to_string(self.editor_dir().join("seen").join(n.to_string()))
            .expect("editor was not launched")
    }

    /// Number of editor launches.
    pub fn launches(&self) -> usize {
        self.editor_paths().len()
    }

    /// Scratch paths handed to the editor.
    pub fn editor_paths(&self) -> Vec<PathBuf> {
        std::fs::read_to_string(self.editor_dir().join("paths.log"))
            .unwrap_or_default()
            .lines()
            .map(PathBuf::from)
            .collect()
    }

    /// Files left in the scratch directory.
    pub fn leftovers(&self) -> Vec<PathBuf> {
        std::fs::read_dir(self.tmp())
            .expect("failed to read tmp")
            .map(|e| e.expect("failed to read entry").path())
            .collect()
    }
}

fn install_script(path: &Path, body: &str) {
    std::fs::write(path, body).expect("failed to write script");
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("failed to chmod script");
}
