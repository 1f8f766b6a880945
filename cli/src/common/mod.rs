//! # Augmentor Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers and the augmentor, kept apart
//! from command-specific logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: Reading and writing documents; self-deleting scratch files.
//! - **`process`**: Running external programs and capturing their output.
//! - **`ui`**: Progress display on stderr.
//!
//! ```rust
//! use crate::common::{fs, process};
//!
//! let contents = fs::io::read_file_to_string(path)?;
//! let output = process::run_command_capture("dotnet", &args)?;
//! ```
//!

/// Utilities for filesystem operations (document I/O, scratch files).
pub mod fs;
/// Utilities for executing and managing external processes.
pub mod process;
/// Utilities for terminal user interface elements (progress).
pub mod ui;
