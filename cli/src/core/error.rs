//! # Augmentor Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Augmentor CLI.
//! It follows a two-layer approach:
//! - `AugmentError`: A `thiserror` enum naming the failure modes of the
//!   solution merger, the flag injector and the ambient infrastructure.
//! - `Result<T>`: A type alias for `anyhow::Result<T>` so callers can attach
//!   context to I/O failures with `.with_context(...)`.
//!
//! The domain failures split into two groups:
//! - **Recoverable**: `MissingSubmodule` and `ExternalToolFailure`. These are
//!   reported to the diagnostics sink and absorbed; the caller receives the
//!   original (or partially merged) document.
//! - **Fatal**: `MalformedProjectDocument`, `Config`, `FileSystem`. These are
//!   propagated to `main`, which prints them and exits with status 1.
//!
//! ## Examples
//!
//! ```rust
//! // Checking for a specific error kind after propagation through anyhow
//! match augmentor.enable_flag(path, &contents) {
//!     Ok(updated) => print!("{}", updated),
//!     Err(e) if matches!(e.downcast_ref::<AugmentError>(), Some(AugmentError::MalformedProjectDocument(_))) => {
//!         eprintln!("Refusing to rewrite a broken project file: {}", e);
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Augmentor application.
#[derive(Error, Debug)]
pub enum AugmentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Submodule directory '{}' does not exist.", .path.display())]
    MissingSubmodule { path: PathBuf },

    #[error("Failed to add project '{}' to solution '{}': {detail}", .project.display(), .solution.display())]
    ExternalToolFailure {
        project: PathBuf,
        solution: PathBuf,
        detail: String,
    },

    #[error("Malformed project document: {0}")]
    MalformedProjectDocument(String),

    #[error("External command failed: {cmd}, Status: {status}, Output:\n{output}")]
    ExternalCommand {
        cmd: String,
        status: String,
        output: String,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
