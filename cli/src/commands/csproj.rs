//! # Flag Injection Command (`augmentor csproj`)
//!
//! File: cli/src/commands/csproj.rs
//!
//! ## Overview
//!
//! Enables the configured build flag (by default `<Nullable>enable</Nullable>`)
//! in a generated project file by appending it to the first top-level
//! `<PropertyGroup>`.
//!
//! Unlike `sln`, a malformed project file is an error: the command exits with a
//! non-zero status and writes nothing, so a broken file is never passed on to
//! the build. A missing submodule is still a pass-through.
//!
//! ## Examples
//!
//! ```bash
//! augmentor csproj Assembly-CSharp.csproj --in-place
//! augmentor csproj Assembly-CSharp.csproj > patched.csproj
//! ```
//!
use super::{load_session, DocumentArgs, GlobalOptions};
use crate::augment::{Augmentor, ProjectAugmentor};
use crate::common::ui::progress::ProgressDiagnostics;
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the `csproj` command.
#[derive(Parser, Debug)]
pub struct CsprojArgs {
    #[command(flatten)]
    pub document: DocumentArgs,
    /// Submodule root whose presence gates the rewrite.
    #[arg(long, value_name = "DIR")]
    pub submodule: Option<PathBuf>,
}

/// Handler function for the `csproj` command.
pub fn handle_csproj(args: CsprojArgs, globals: &GlobalOptions) -> Result<()> {
    info!("Handling csproj command for {}", args.document.path.display());
    let (cfg, submodule_root) = load_session(globals, args.submodule.as_deref())?;
    let contents = args.document.read()?;

    let diagnostics = ProgressDiagnostics::hidden();
    let augmentor = Augmentor::without_tool(submodule_root, &cfg, &diagnostics);

    let updated = augmentor.enable_flag(&args.document.path, &contents)?;
    args.document.write(&updated)
}
