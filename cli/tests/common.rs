//! # Augmentor CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates (`sln.rs`, `csproj.rs`, ...):
//! a handle on the compiled binary and a throwaway workspace holding a
//! submodule, an explicit config file, and generated documents.
//!
//! The workspace config swaps `dotnet` for a POSIX shell script that appends
//! `added <project file name>` to the solution, and fails for any project file
//! named `bad.proj`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Config used by every workspace; `Core` resolves against the workspace root.
const WORKSPACE_CONFIG: &str = r#"
[submodule]
directory = "Core"
project_extension = "proj"

[tool]
program = "sh"
args = ["-c", "case \"$1\" in */bad.proj) echo \"cannot add $1\" >&2; exit 1;; esac; echo \"added $(basename \"$1\")\" >> \"$0\"", "{solution}", "{project}"]
"#;

/// Returns a command for the `augmentor` binary built for this test run.
pub fn augmentor_cmd() -> Command {
    let mut cmd = Command::cargo_bin("augmentor").expect("Failed to find augmentor binary for testing");
    cmd.env_remove("RUST_LOG").env_remove("AUGMENTOR_CONFIG");
    cmd
}

/// A temporary directory laid out like a game project checkout.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Creates the workspace and its config file, without a submodule.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp workspace");
        fs::write(dir.path().join("augmentor.toml"), WORKSPACE_CONFIG)
            .expect("Failed to write workspace config");
        Self { dir }
    }

    /// Creates the workspace with `Core/<rel>` project files.
    pub fn with_projects(projects: &[&str]) -> Self {
        let ws = Self::new();
        fs::create_dir_all(ws.submodule()).expect("Failed to create submodule");
        for rel in projects {
            ws.write(&format!("Core/{}", rel), "<Project />");
        }
        ws
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn submodule(&self) -> PathBuf {
        self.root().join("Core")
    }

    pub fn config(&self) -> PathBuf {
        self.root().join("augmentor.toml")
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write workspace file");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root().join(rel)).expect("Failed to read workspace file")
    }

    /// Names of the entries directly inside the workspace, sorted.
    pub fn entries(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.root())
            .expect("Failed to list workspace")
            .map(|e| e.expect("Bad dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// An `augmentor` command running inside the workspace with its config.
    pub fn cmd(&self) -> Command {
        let mut cmd = augmentor_cmd();
        cmd.current_dir(self.root()).arg("--config").arg(self.config());
        cmd
    }
}
