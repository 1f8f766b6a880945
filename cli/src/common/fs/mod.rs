//! # Augmentor Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the command handlers and the augmentor:
//!
//! - **`io`**: Reading documents from files or stdin and writing results back.
//! - **`scratch`**: Self-deleting temporary copies of documents handed to
//!   external tools.
//!
//! ```rust
//! use crate::common::fs::{io, scratch::ScratchFile};
//!
//! let contents = io::read_file_to_string(path)?;
//! let scratch = ScratchFile::create_beside(path, &contents)?;
//! ```
//!

/// Reading and writing whole documents.
pub mod io;
/// Temporary document copies with guaranteed cleanup.
pub mod scratch;
