//! # Augmentor Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that attach context to errors, used by the
//! command handlers to read input documents and write results back.
//!
//! - **`read_file_to_string`**: Reads a whole file, naming the path on failure.
//! - **`read_stdin_to_string`**: Reads all of standard input (for `--stdin`).
//! - **`write_string_to_file`**: Writes content, creating the parent directory
//!   when missing and overwriting any existing file.
//!
use crate::core::error::{AugmentError, Result};
use anyhow::Context;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating it (and any
/// parents) if needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creating
/// the directory fails.
fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(AugmentError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Reads all of standard input into a string.
pub fn read_stdin_to_string() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read document from standard input")?;
    Ok(content)
}

/// Writes string content to a specified file path, overwriting if it exists.
///
/// # Errors
///
/// Returns an `Err` if the parent directory cannot be created or the write fails.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}
