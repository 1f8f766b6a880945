//! # Augmentor UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal user-interface helpers. Output documents go to stdout, so everything
//! here draws on stderr.
//!
//! - **`progress`**: A progress bar that doubles as the diagnostics sink for the
//!   command-line front end.
//!

/// Progress bar backed diagnostics.
pub mod progress;
