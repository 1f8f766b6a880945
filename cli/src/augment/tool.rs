//! # Solution Tool (`augment::tool`)
//!
//! File: cli/src/augment/tool.rs
//!
//! The external "add project to solution" operation. `CommandTool` runs the
//! configured program (by default `dotnet sln {solution} add {project}`) and
//! only looks at its exit status; output is kept for error messages.
//!
use crate::common::process;
use crate::core::config::{ToolConfig, PROJECT_PLACEHOLDER, SOLUTION_PLACEHOLDER};
use crate::core::error::Result;
use anyhow::bail;
use std::path::Path;

/// Adds a project file to a solution file on disk.
pub trait SolutionTool {
    fn add_project(&self, solution: &Path, project: &Path) -> Result<()>;
}

/// Runs an external program built from an argument template.
#[derive(Debug, Clone)]
pub struct CommandTool {
    program: String,
    args: Vec<String>,
}

impl CommandTool {
    pub fn new(config: &ToolConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    fn render_args(&self, solution: &Path, project: &Path) -> Vec<String> {
        let solution = solution.to_string_lossy();
        let project = project.to_string_lossy();
        self.args
            .iter()
            .map(|arg| {
                arg.replace(SOLUTION_PLACEHOLDER, &solution)
                    .replace(PROJECT_PLACEHOLDER, &project)
            })
            .collect()
    }
}

impl SolutionTool for CommandTool {
    fn add_project(&self, solution: &Path, project: &Path) -> Result<()> {
        let args = self.render_args(solution, project);
        process::run_command_capture(&self.program, &args)?;
        Ok(())
    }
}

/// Stand-in for commands that never modify a solution. Every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSolutionTool;

impl SolutionTool for NoSolutionTool {
    fn add_project(&self, solution: &Path, project: &Path) -> Result<()> {
        bail!(
            "No solution tool is available to add {} to {}",
            project.display(),
            solution.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_render_args_substitutes_placeholders() {
        let tool = CommandTool::new(&ToolConfig::default());
        let args = tool.render_args(Path::new("/w/.augmentor-1.sln"), Path::new("/c/A/a.csproj"));
        assert_eq!(args, vec!["sln", "/w/.augmentor-1.sln", "add", "/c/A/a.csproj"]);
    }

    #[test]
    fn test_render_args_inside_larger_argument() {
        let tool = CommandTool::new(&ToolConfig {
            program: "sh".into(),
            args: vec!["-c".into(), "add {project} to {solution}".into()],
        });
        let args = tool.render_args(Path::new("s.sln"), Path::new("p.proj"));
        assert_eq!(args[1], "add p.proj to s.sln");
    }

    #[cfg(unix)]
    #[test]
    fn test_command_tool_rewrites_solution() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let solution = dir.path().join("Game.sln");
        fs::write(&solution, "SOLUTION_V1\n")?;

        let tool = CommandTool::new(&ToolConfig {
            program: "sh".into(),
            args: vec![
                "-c".into(),
                "echo \"added $1\" >> \"$0\"".into(),
                "{solution}".into(),
                "{project}".into(),
            ],
        });
        tool.add_project(&solution, Path::new("A/a.proj"))?;

        assert_eq!(fs::read_to_string(&solution)?, "SOLUTION_V1\nadded A/a.proj\n");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_command_tool_failure_propagates() {
        let tool = CommandTool::new(&ToolConfig {
            program: "sh".into(),
            args: vec!["-c".into(), "exit 1".into(), "{solution}".into(), "{project}".into()],
        });
        assert!(tool
            .add_project(Path::new("s.sln"), Path::new("p.proj"))
            .is_err());
    }

    #[test]
    fn test_no_solution_tool_always_fails() {
        let err = NoSolutionTool
            .add_project(Path::new("Game.sln"), Path::new("A/a.csproj"))
            .unwrap_err();
        assert!(err.to_string().contains("No solution tool"));
    }
}
