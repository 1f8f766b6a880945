//! # Augmentor Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components shared by every
//! command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error taxonomy and the `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{AugmentError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
