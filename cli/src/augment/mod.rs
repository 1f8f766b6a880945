//! # Project Augmentation (`augment`)
//!
//! File: cli/src/augment/mod.rs
//!
//! ## Overview
//!
//! Post-processing for documents generated by a game engine's IDE integration.
//! Two independent operations share one precondition, the presence of the
//! submodule that holds the extra projects:
//!
//! - **Solution merging** (`merge_submodule_projects`): every project file found
//!   one level below the submodule root is added to the solution through an
//!   external tool (see `solution` and `discovery`).
//! - **Flag injection** (`enable_flag`): a build property is appended to the
//!   first top-level property group of a project file (see `flag`).
//!
//! ## Architecture
//!
//! A host (the CLI, or anything embedding this module) holds a
//! `ProjectAugmentor` and calls it synchronously with `(path, contents)` pairs
//! whenever documents are regenerated. `Augmentor` is the implementation; its
//! collaborators are injected:
//!
//! - `SolutionTool`: the external "add project" operation (`tool`)
//! - `Diagnostics`: where recoverable failures and progress are reported
//!
//! Failure policy:
//! - Missing submodule: one diagnostic error, input returned unchanged.
//! - A failing tool invocation: one diagnostic error, batch continues.
//! - A malformed project document: returned as `Err`.
//!
//! ## Example
//!
//! ```rust
//! let tool = CommandTool::new(&cfg.tool);
//! let augmentor = Augmentor::new(submodule_root, &cfg, &tool, &diagnostics);
//! let merged = augmentor.merge_submodule_projects(Path::new("Game.sln"), &contents)?;
//! ```
//!
pub mod diagnostics;
pub mod discovery;
pub mod flag;
pub mod solution;
pub mod tool;

#[cfg(test)]
pub(crate) mod test_support;

use crate::core::config::{Config, FlagConfig};
use crate::core::error::{AugmentError, Result};
use diagnostics::Diagnostics;
use std::path::{Path, PathBuf};
use tool::{NoSolutionTool, SolutionTool};
use tracing::{debug, info};

/// Rewrites generated solution and project documents.
pub trait ProjectAugmentor {
    /// Returns `contents` with every submodule project added to the solution.
    fn merge_submodule_projects(&self, solution_path: &Path, contents: &str) -> Result<String>;

    /// Returns `contents` with the configured build flag enabled.
    fn enable_flag(&self, project_path: &Path, contents: &str) -> Result<String>;
}

/// The standard `ProjectAugmentor`, driven by configuration.
pub struct Augmentor<'a> {
    submodule_root: PathBuf,
    project_extension: String,
    flag: FlagConfig,
    tool: &'a dyn SolutionTool,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> Augmentor<'a> {
    pub fn new(
        submodule_root: PathBuf,
        config: &Config,
        tool: &'a dyn SolutionTool,
        diagnostics: &'a dyn Diagnostics,
    ) -> Self {
        Self {
            submodule_root,
            project_extension: config.submodule.project_extension.clone(),
            flag: config.flag.clone(),
            tool,
            diagnostics,
        }
    }

    /// An augmentor for callers that only inject flags or list projects.
    ///
    /// `merge_submodule_projects` still runs, but every project is reported as
    /// a tool failure.
    pub fn without_tool(
        submodule_root: PathBuf,
        config: &Config,
        diagnostics: &'a dyn Diagnostics,
    ) -> Self {
        Self::new(submodule_root, config, &NoSolutionTool, diagnostics)
    }

    pub fn submodule_root(&self) -> &Path {
        &self.submodule_root
    }

    /// Lists the submodule's project files in the order they would be added.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        self.require_submodule()?;
        Ok(discovery::discover_projects(
            &self.submodule_root,
            &self.project_extension,
            self.diagnostics,
        ))
    }

    fn require_submodule(&self) -> Result<()> {
        if self.submodule_root.is_dir() {
            Ok(())
        } else {
            Err(AugmentError::MissingSubmodule {
                path: self.submodule_root.clone(),
            }
            .into())
        }
    }

    /// Runs the submodule check, reporting a failure to diagnostics.
    ///
    /// Returns `false` when the caller should pass its input through.
    fn submodule_present(&self) -> bool {
        match self.require_submodule() {
            Ok(()) => true,
            Err(e) => {
                self.diagnostics.error(&e.to_string());
                false
            }
        }
    }
}

impl ProjectAugmentor for Augmentor<'_> {
    fn merge_submodule_projects(&self, solution_path: &Path, contents: &str) -> Result<String> {
        if !self.submodule_present() {
            return Ok(contents.to_string());
        }
        let projects = discovery::discover_projects(
            &self.submodule_root,
            &self.project_extension,
            self.diagnostics,
        );
        info!(
            "Found {} project(s) under {}",
            projects.len(),
            self.submodule_root.display()
        );
        solution::merge_projects(
            solution_path,
            contents,
            &projects,
            self.tool,
            self.diagnostics,
        )
    }

    fn enable_flag(&self, project_path: &Path, contents: &str) -> Result<String> {
        if !self.submodule_present() {
            return Ok(contents.to_string());
        }
        debug!(
            "Enabling <{}> in {}",
            self.flag.name,
            project_path.display()
        );
        flag::inject_flag(contents, &self.flag)
    }
}
