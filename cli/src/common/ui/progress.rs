//! # Progress Display (`common::ui::progress`)
//!
//! File: cli/src/common/ui/progress.rs
//!
//! `ProgressDiagnostics` is the diagnostics sink used by the command-line front
//! end. Progress updates drive an `indicatif` bar on stderr (hidden when stderr
//! is not a terminal); errors and warnings go through `tracing`, with the bar
//! suspended so log lines are not drawn over it.
//!
use crate::augment::diagnostics::{Diagnostics, TracingDiagnostics};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "[{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Diagnostics sink drawing a progress bar for batch operations.
pub struct ProgressDiagnostics {
    bar: RefCell<Option<ProgressBar>>,
    hidden: bool,
    log: TracingDiagnostics,
}

impl ProgressDiagnostics {
    pub fn new() -> Self {
        Self::with_visibility(false)
    }

    /// A sink that never draws, for non-interactive use.
    pub fn hidden() -> Self {
        Self::with_visibility(true)
    }

    fn with_visibility(hidden: bool) -> Self {
        Self {
            bar: RefCell::new(None),
            hidden,
            log: TracingDiagnostics,
        }
    }

    fn create_bar(&self, total: usize) -> ProgressBar {
        if self.hidden {
            return ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::hidden());
        }
        let bar = ProgressBar::new(total as u64);
        match ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            Ok(style) => bar.set_style(style.progress_chars("#>-")),
            Err(e) => tracing::debug!("Falling back to default progress style: {}", e),
        }
        bar
    }

    /// Runs `f` with the bar (if any) temporarily cleared from the terminal.
    fn suspended(&self, f: impl FnOnce()) {
        match self.bar.borrow().as_ref() {
            Some(bar) => bar.suspend(f),
            None => f(),
        }
    }
}

impl Default for ProgressDiagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics for ProgressDiagnostics {
    fn error(&self, message: &str) {
        self.suspended(|| self.log.error(message));
    }

    fn warn(&self, message: &str) {
        self.suspended(|| self.log.warn(message));
    }

    fn progress(&self, label: &str, index: usize, total: usize) {
        let mut slot = self.bar.borrow_mut();
        let bar = slot.get_or_insert_with(|| self.create_bar(total));
        bar.set_message(format!("{} ({} of {})", label, index, total));
        bar.set_position(index as u64);
        tracing::debug!("{} ({} of {})", label, index, total);
        if index >= total {
            bar.finish_and_clear();
            *slot = None;
        }
    }
}

impl Drop for ProgressDiagnostics {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.get_mut().take() {
            bar.abandon();
        }
    }
}
