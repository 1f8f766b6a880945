//! In-memory fakes for the augmentor's collaborators.

use super::diagnostics::Diagnostics;
use super::tool::SolutionTool;
use crate::core::error::Result;
use std::cell::RefCell;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    errors: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
    progress: RefCell<Vec<(String, usize, usize)>>,
}

impl RecordingDiagnostics {
    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn progress_events(&self) -> Vec<(String, usize, usize)> {
        self.progress.borrow().clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn progress(&self, label: &str, index: usize, total: usize) {
        self.progress
            .borrow_mut()
            .push((label.to_string(), index, total));
    }
}

/// Appends `added <file name>` to the solution for each project.
#[derive(Debug, Default)]
pub struct AppendingTool {
    fail_on: Vec<String>,
    delete_solution: bool,
    attempts: RefCell<Vec<String>>,
}

impl AppendingTool {
    /// Fails for projects whose file name is listed.
    pub fn failing_on(names: &[&str]) -> Self {
        Self {
            fail_on: names.iter().map(|n| n.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Removes the solution file instead of appending to it.
    pub fn deleting_solution() -> Self {
        Self {
            delete_solution: true,
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> Vec<String> {
        self.attempts.borrow().clone()
    }
}

impl SolutionTool for AppendingTool {
    fn add_project(&self, solution: &Path, project: &Path) -> Result<()> {
        let name = project
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.attempts.borrow_mut().push(name.clone());

        if self.fail_on.contains(&name) {
            anyhow::bail!("simulated failure for {}", name);
        }
        if self.delete_solution {
            fs::remove_file(solution)?;
            return Ok(());
        }
        let mut file = OpenOptions::new().append(true).open(solution)?;
        writeln!(file, "added {}", name)?;
        Ok(())
    }
}
