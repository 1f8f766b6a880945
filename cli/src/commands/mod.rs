//! # Augmentor Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module organizes the top-level commands of the Augmentor CLI:
//!
//! - **`sln`**: Adds every submodule project to a generated solution.
//! - **`csproj`**: Enables the configured build flag in a generated project.
//! - **`projects`**: Lists the submodule projects that `sln` would add.
//!
//! It also holds what the handlers share: global options, the document
//! input/output arguments, and the configuration/submodule resolution every
//! command performs first.
//!
//! ## Architecture
//!
//! Each command module exposes:
//! - An `Args` struct derived with Clap
//! - A `handle_*` function taking those args plus `GlobalOptions`
//!
//! ```bash
//! augmentor sln Game.sln --in-place
//! cat Game.csproj | augmentor csproj Game.csproj --stdin > Game.fixed.csproj
//! augmentor projects --submodule ../Engine.Core
//! ```
//!
use crate::common::fs::io;
use crate::core::config::{self, Config};
use crate::core::error::Result;
use anyhow::Context;
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod csproj;
pub mod projects;
pub mod sln;

/// Options that apply to every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub project_root: Option<PathBuf>,
}

/// Where a document comes from and where the result goes.
#[derive(Args, Debug, Clone)]
pub struct DocumentArgs {
    /// Path of the generated document.
    pub path: PathBuf,
    /// Read the document contents from stdin instead of from PATH.
    #[arg(long)]
    pub stdin: bool,
    /// Write the result back to PATH instead of printing it.
    #[arg(long)]
    pub in_place: bool,
}

impl DocumentArgs {
    pub fn read(&self) -> Result<String> {
        if self.stdin {
            io::read_stdin_to_string()
        } else {
            io::read_file_to_string(&self.path)
        }
    }

    pub fn write(&self, contents: &str) -> Result<()> {
        if self.in_place {
            return io::write_string_to_file(&self.path, contents);
        }
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(contents.as_bytes())
            .and_then(|_| stdout.flush())
            .context("Failed to write result to stdout")
    }
}

/// Loads configuration and resolves the submodule root.
///
/// An explicit `--submodule` wins over the configured directory.
pub fn load_session(globals: &GlobalOptions, submodule: Option<&Path>) -> Result<(Config, PathBuf)> {
    let cfg = config::load_config(globals.config.as_deref())?;
    let root = match submodule {
        Some(dir) => dir.to_path_buf(),
        None => cfg.resolve_submodule_root(globals.project_root.as_deref())?,
    };
    debug!("Using submodule root: {}", root.display());
    Ok((cfg, root))
}
