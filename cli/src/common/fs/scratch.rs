//! # Scratch Files (`common::fs::scratch`)
//!
//! File: cli/src/common/fs/scratch.rs
//!
//! ## Overview
//!
//! A `ScratchFile` is a temporary on-disk copy of a document that an external
//! tool can rewrite in place. It lives in the same directory as the document it
//! stands in for and keeps the same extension, because tools such as
//! `dotnet sln` resolve relative project paths against the solution's directory
//! and refuse files without a `.sln` suffix.
//!
//! The file is removed when the `ScratchFile` is dropped, so every exit path
//! (including `?` propagation and panics) cleans up. `close` removes it
//! explicitly and surfaces deletion errors.
//!
//! ```rust
//! let scratch = ScratchFile::create_beside(Path::new("Game.sln"), &contents)?;
//! run_tool(scratch.path())?;
//! let updated = scratch.read()?;
//! scratch.close()?;
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempPath;
use tracing::debug;

const SCRATCH_PREFIX: &str = ".augmentor-";

/// A temporary copy of a document, deleted on drop.
#[derive(Debug)]
pub struct ScratchFile {
    path: TempPath,
}

impl ScratchFile {
    /// Creates a scratch file next to `target`, holding `contents`.
    ///
    /// The file handle is closed before returning so other processes can
    /// replace the file freely.
    pub fn create_beside(target: &Path, contents: &str) -> Result<Self> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let suffix = target
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        let mut file = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(&suffix)
            .tempfile_in(dir)
            .with_context(|| format!("Failed to create scratch file in {:?}", dir))?;
        file.write_all(contents.as_bytes())
            .and_then(|_| file.flush())
            .with_context(|| format!("Failed to write scratch file {:?}", file.path()))?;

        let path = file.into_temp_path();
        debug!("Created scratch file {:?} for {:?}", &*path, target);
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the current contents of the scratch file.
    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read scratch file {:?}", self.path()))
    }

    /// Deletes the scratch file now, reporting failure instead of ignoring it.
    pub fn close(self) -> Result<()> {
        let shown = self.path.to_path_buf();
        self.path
            .close()
            .with_context(|| format!("Failed to delete scratch file {:?}", shown))?;
        debug!("Deleted scratch file {:?}", shown);
        Ok(())
    }
}
