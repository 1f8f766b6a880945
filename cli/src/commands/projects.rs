//! # Project Listing Command (`augmentor projects`)
//!
//! File: cli/src/commands/projects.rs
//!
//! Prints the project files `augmentor sln` would add, one per line, in the
//! order they would be added. Fails when the submodule root is missing.
//!
use super::{load_session, GlobalOptions};
use crate::augment::Augmentor;
use crate::common::ui::progress::ProgressDiagnostics;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the `projects` command.
#[derive(Parser, Debug)]
pub struct ProjectsArgs {
    /// Submodule root to scan instead of the configured one.
    #[arg(long, value_name = "DIR")]
    pub submodule: Option<PathBuf>,
}

/// Handler function for the `projects` command.
pub fn handle_projects(args: ProjectsArgs, globals: &GlobalOptions) -> Result<()> {
    let (cfg, submodule_root) = load_session(globals, args.submodule.as_deref())?;
    let diagnostics = ProgressDiagnostics::hidden();
    let augmentor = Augmentor::without_tool(submodule_root, &cfg, &diagnostics);

    let projects = augmentor.discover()?;
    if projects.is_empty() {
        tracing::warn!(
            "No *.{} files found under {}",
            cfg.submodule.project_extension,
            augmentor.submodule_root().display()
        );
    }
    for project in projects {
        println!("{}", project.display());
    }
    Ok(())
}
