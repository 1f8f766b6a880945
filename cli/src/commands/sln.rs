//! # Solution Merge Command (`augmentor sln`)
//!
//! File: cli/src/commands/sln.rs
//!
//! ## Overview
//!
//! Adds every project found one level below the submodule root to a generated
//! solution file, using the configured solution tool (`dotnet sln ... add ...`
//! by default).
//!
//! - A missing submodule is logged and the solution is emitted unchanged; the
//!   command still succeeds so a regeneration pipeline is never interrupted.
//! - A project the tool fails to add is logged and skipped.
//!
//! ## Examples
//!
//! ```bash
//! # Print the merged solution
//! augmentor sln Game.sln
//!
//! # Merge in place, using a different submodule checkout
//! augmentor sln Game.sln --in-place --submodule ../Engine.Core
//!
//! # Host-style invocation: contents on stdin, result written to the path
//! generate-solution | augmentor sln Game.sln --stdin --in-place
//! ```
//!
use super::{load_session, DocumentArgs, GlobalOptions};
use crate::augment::tool::CommandTool;
use crate::augment::{Augmentor, ProjectAugmentor};
use crate::common::ui::progress::ProgressDiagnostics;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the `sln` command.
#[derive(Parser, Debug)]
pub struct SlnArgs {
    #[command(flatten)]
    pub document: DocumentArgs,
    /// Submodule root to scan instead of the configured one.
    #[arg(long, value_name = "DIR")]
    pub submodule: Option<PathBuf>,
}

/// Handler function for the `sln` command.
pub fn handle_sln(args: SlnArgs, globals: &GlobalOptions) -> Result<()> {
    info!("Handling sln command for {}", args.document.path.display());
    let (cfg, submodule_root) = load_session(globals, args.submodule.as_deref())?;
    let contents = args.document.read()?;

    let tool = CommandTool::new(&cfg.tool);
    let diagnostics = ProgressDiagnostics::new();
    let augmentor = Augmentor::new(submodule_root, &cfg, &tool, &diagnostics);

    let merged = augmentor.merge_submodule_projects(&args.document.path, &contents)?;
    args.document.write(&merged)
}
