//! # Augmentor Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Augmentor CLI, a
//! post-processor for IDE files generated by a game engine build pipeline.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`sln`, `csproj`, `projects`) is a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! Logs go to stderr; stdout carries only document output, so the tool can sit
//! in a pipe.
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! augmentor --help
//!
//! # Merge submodule projects into a solution with verbose logging
//! augmentor -vv sln Game.sln --in-place
//! ```
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod augment; // Solution merging and flag injection
mod commands; // Handles specific command logic (sln, csproj, projects)
mod common; // Shared utilities (fs, process, ui)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "augmentor",
    about = "Augments generated IDE solutions and project files",
    long_about = "Adds submodule projects to generated solution files and enables build flags\n\
                  in generated project files. Designed to run after every IDE file regeneration.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Configuration file to use instead of searching for `.augmentor.toml`.
    #[arg(long, env = "AUGMENTOR_CONFIG", global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Directory that relative submodule paths are resolved against.
    #[arg(long, global = true, value_name = "DIR")]
    project_root: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Add every submodule project to a solution file
    #[command(alias = "s")]
    Sln(commands::sln::SlnArgs),
    /// Enable the configured build flag in a project file
    #[command(alias = "p")]
    Csproj(commands::csproj::CsprojArgs),
    /// List the submodule projects that `sln` would add
    Projects(commands::projects::ProjectsArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let globals = commands::GlobalOptions {
        config: cli.config,
        project_root: cli.project_root,
    };
    let command_result = match cli.command {
        Commands::Sln(args) => commands::sln::handle_sln(args, &globals),
        Commands::Csproj(args) => commands::csproj::handle_csproj(args, &globals),
        Commands::Projects(args) => commands::projects::handle_projects(args, &globals),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
