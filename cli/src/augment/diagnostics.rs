//! # Diagnostics Sink (`augment::diagnostics`)
//!
//! File: cli/src/augment/diagnostics.rs
//!
//! The augmentor never prints or exits on recoverable failures. It reports them,
//! together with per-project progress, to a `Diagnostics` implementation owned
//! by whoever hosts it: the CLI draws a progress bar, tests record calls.
//!
use tracing::{error, info, warn};

/// Receives recoverable failures and progress from the augmentor.
pub trait Diagnostics {
    fn error(&self, message: &str);
    fn warn(&self, message: &str);
    /// Reports that step `index` of `total` (1-based) has finished.
    fn progress(&self, label: &str, index: usize, total: usize);
}

/// Forwards everything to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn error(&self, message: &str) {
        error!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn progress(&self, label: &str, index: usize, total: usize) {
        info!("{} ({} of {})", label, index, total);
    }
}
