//! # Solution Merger (`augment::solution`)
//!
//! File: cli/src/augment/solution.rs
//!
//! Adds a list of project files to a solution document through the external
//! solution tool. The document is written to a scratch file beside the real
//! solution, the tool rewrites that file once per project, and the final
//! scratch contents become the result.
//!
//! A failing project is reported and skipped; the remaining projects are still
//! added. Nothing here distinguishes "all added" from "some failed" in the
//! return value, only the diagnostics do.
//!
use super::diagnostics::Diagnostics;
use super::tool::SolutionTool;
use crate::common::fs::scratch::ScratchFile;
use crate::core::error::{AugmentError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Adds every entry of `projects`, in order, to the solution `contents`.
///
/// `solution_path` only decides where the scratch file lives and names the
/// solution in messages; the file at that path is never read or written.
pub fn merge_projects(
    solution_path: &Path,
    contents: &str,
    projects: &[PathBuf],
    tool: &dyn SolutionTool,
    diagnostics: &dyn Diagnostics,
) -> Result<String> {
    let scratch = ScratchFile::create_beside(solution_path, contents)?;
    let total = projects.len();
    info!(
        "Adding {} project(s) to solution {}",
        total,
        solution_path.display()
    );

    for (i, project) in projects.iter().enumerate() {
        match tool.add_project(scratch.path(), project) {
            Ok(()) => debug!("Added {} to {}", project.display(), solution_path.display()),
            Err(e) => {
                let failure = AugmentError::ExternalToolFailure {
                    project: project.clone(),
                    solution: solution_path.to_path_buf(),
                    detail: format!("{:#}", e),
                };
                diagnostics.error(&failure.to_string());
            }
        }
        let name = project
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| project.display().to_string());
        diagnostics.progress(&format!("Adding {}", name), i + 1, total);
    }

    let merged = scratch.read()?;
    scratch.close()?;
    Ok(merged)
}
