//! # Augmentor Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs external programs to completion and captures their output. Used by the
//! solution merger to invoke the configured "add project to solution" tool
//! once per discovered project.
//!
//! Commands are run synchronously: the calling thread blocks until the child
//! exits. A command that cannot be spawned, or that exits with a non-zero
//! status, is returned as an error; a non-zero exit is reported as
//! `AugmentError::ExternalCommand` carrying the combined output.
//!
//! ```rust
//! let output = process::run_command_capture("dotnet", &args)?;
//! tracing::debug!("dotnet said: {}", output.stdout);
//! ```
//!
use crate::core::error::{AugmentError, Result};
use anyhow::Context;
use std::process::Command;
use tracing::debug;

/// Captured output of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs `program` with `args` in the current directory and captures its output.
///
/// # Errors
///
/// - The program could not be started (not found, permissions).
/// - The program exited unsuccessfully (`AugmentError::ExternalCommand`).
pub fn run_command_capture(program: &str, args: &[String]) -> Result<CommandOutput> {
    let shown = display_command(program, args);
    debug!("Running command: {}", shown);

    let output = Command::new(program)
        .args(args)
        .output()
        .with_context(|| format!("Failed to execute command '{}'", shown))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    debug!(
        "Command '{}' finished: status={}, stdout='{}', stderr='{}'",
        shown,
        output.status,
        stdout.trim_end(),
        stderr.trim_end()
    );

    if !output.status.success() {
        anyhow::bail!(AugmentError::ExternalCommand {
            cmd: shown,
            status: output.status.to_string(),
            output: format!("{}{}", stdout, stderr),
        });
    }
    Ok(CommandOutput { stdout, stderr })
}

fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(|part| {
            if part.contains(char::is_whitespace) {
                format!("\"{}\"", part)
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
