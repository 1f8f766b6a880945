//! # Augmentor Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for the Augmentor, handling
//! loading, merging, validation, and access to configuration data. It combines
//! built-in defaults, user settings, and project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` (or `AUGMENTOR_CONFIG`), otherwise
//!    a project-specific `.augmentor.toml` in the current directory or ancestors
//! 2. User-specific `<config dir>/augmentor/config.toml`
//! 3. Default values defined in the code
//!
//! With the defaults, projects are searched in the
//! `YARG.Core` submodule, added with `dotnet sln <solution> add <project>`, and
//! every generated project gets `<Nullable>enable</Nullable>`.
//!
//! ## Examples
//!
//! ```toml
//! [submodule]
//! directory = "External/Engine.Core"
//! project_extension = "csproj"
//!
//! [tool]
//! program = "dotnet"
//! args = ["sln", "{solution}", "add", "{project}"]
//!
//! [flag]
//! name = "TreatWarningsAsErrors"
//! value = "true"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(cli.config.as_deref())?;
//! let submodule = cfg.resolve_submodule_root(cli.project_root.as_deref())?;
//! ```
//!
use crate::core::error::{AugmentError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Placeholder replaced by the scratch solution path in tool arguments.
pub const SOLUTION_PLACEHOLDER: &str = "{solution}";
/// Placeholder replaced by the project file path in tool arguments.
pub const PROJECT_PLACEHOLDER: &str = "{project}";

/// The effective configuration after all layers are merged.
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub submodule: SubmoduleConfig,
    pub tool: ToolConfig,
    pub flag: FlagConfig,
    /// Directory of the project (or explicit) config file, if one was loaded.
    pub source_dir: Option<PathBuf>,
}

/// Where sub-projects are discovered.
#[derive(Debug, Clone)]
pub struct SubmoduleConfig {
    /// Submodule root (can use ~). Relative paths resolve against the project root.
    pub directory: String,
    /// Extension of project files, with or without the leading dot.
    pub project_extension: String,
}

/// The external program that adds a project to a solution.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub program: String,
    /// Argument template; must contain `{solution}` and `{project}`.
    pub args: Vec<String>,
}

/// The build flag injected into generated project files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagConfig {
    pub property_group: String,
    pub name: String,
    pub value: String,
}

/// A single TOML file as written. Keys it leaves out are `None` and fall
/// through to the layer below.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    submodule: SubmoduleLayer,
    #[serde(default)]
    tool: ToolLayer,
    #[serde(default)]
    flag: FlagLayer,
    #[serde(skip)]
    source_dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct SubmoduleLayer {
    directory: Option<String>,
    project_extension: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ToolLayer {
    program: Option<String>,
    args: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct FlagLayer {
    property_group: Option<String>,
    name: Option<String>,
    value: Option<String>,
}

impl ConfigFile {
    /// Overwrites every key of `config` that this file sets.
    fn apply_to(self, config: &mut Config) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }
        set(&mut config.submodule.directory, self.submodule.directory);
        set(
            &mut config.submodule.project_extension,
            self.submodule.project_extension,
        );
        set(&mut config.tool.program, self.tool.program);
        set(&mut config.tool.args, self.tool.args);
        set(&mut config.flag.property_group, self.flag.property_group);
        set(&mut config.flag.name, self.flag.name);
        set(&mut config.flag.value, self.flag.value);
        if self.source_dir.is_some() {
            config.source_dir = self.source_dir;
        }
    }
}

impl Default for SubmoduleConfig {
    fn default() -> Self {
        Self {
            directory: default_submodule_dir(),
            project_extension: default_project_extension(),
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: default_tool_program(),
            args: default_tool_args(),
        }
    }
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            property_group: default_property_group(),
            name: default_flag_name(),
            value: default_flag_value(),
        }
    }
}

fn default_submodule_dir() -> String {
    "YARG.Core".to_string()
}
fn default_project_extension() -> String {
    "csproj".to_string()
}
fn default_tool_program() -> String {
    "dotnet".to_string()
}
fn default_tool_args() -> Vec<String> {
    ["sln", SOLUTION_PLACEHOLDER, "add", PROJECT_PLACEHOLDER]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_property_group() -> String {
    "PropertyGroup".to_string()
}
fn default_flag_name() -> String {
    "Nullable".to_string()
}
fn default_flag_value() -> String {
    "enable".to_string()
}

impl Config {
    /// Resolves the submodule root directory.
    ///
    /// Absolute (or `~`-expanded) directories are returned as-is. Relative ones are
    /// joined onto `project_root` if given, else onto the directory holding the
    /// loaded project config, else onto the current directory.
    pub fn resolve_submodule_root(&self, project_root: Option<&Path>) -> Result<PathBuf> {
        let dir = PathBuf::from(&self.submodule.directory);
        if dir.is_absolute() {
            return Ok(dir);
        }
        let base = match (project_root, &self.source_dir) {
            (Some(root), _) => root.to_path_buf(),
            (None, Some(source)) => source.clone(),
            (None, None) => std::env::current_dir().context("Failed to get current directory")?,
        };
        Ok(base.join(dir))
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".augmentor.toml";

/// Loads, merges, expands and validates the configuration.
///
/// With `explicit` set, that file replaces the project config search.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Some(load_config_from_path(path)?)
        }
        None => load_project_config()?,
    };
    let mut merged_config = merge_configs(user_config.into_iter().chain(project_config));
    normalize_config(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "augmentor") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            // The user file never anchors relative submodule paths.
            load_config_from_path(&config_path).map(|mut cfg| {
                cfg.source_dir = None;
                Some(cfg)
            })
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.augmentor.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    config.source_dir = path
        .parent()
        .map(|p| if p.as_os_str().is_empty() { Path::new(".") } else { p })
        .map(Path::to_path_buf);
    Ok(config)
}

/// Applies `layers` over the built-in defaults, lowest precedence first.
fn merge_configs(layers: impl IntoIterator<Item = ConfigFile>) -> Config {
    let mut merged = Config::default();
    for layer in layers {
        layer.apply_to(&mut merged);
    }
    merged
}

fn normalize_config(config: &mut Config) {
    config.submodule.directory = shellexpand::tilde(&config.submodule.directory).into_owned();
    debug!("Expanded submodule directory: {}", config.submodule.directory);
    let ext = config.submodule.project_extension.trim();
    config.submodule.project_extension = ext.strip_prefix('.').unwrap_or(ext).to_string();
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.submodule.directory.trim().is_empty() {
        return Err(anyhow!(AugmentError::Config(
            "Submodule directory cannot be empty.".to_string()
        )));
    }
    if config.submodule.project_extension.is_empty() {
        return Err(anyhow!(AugmentError::Config(
            "Project file extension cannot be empty.".to_string()
        )));
    }
    if config.tool.program.trim().is_empty() {
        return Err(anyhow!(AugmentError::Config(
            "Tool program cannot be empty.".to_string()
        )));
    }
    for placeholder in [SOLUTION_PLACEHOLDER, PROJECT_PLACEHOLDER] {
        if !config.tool.args.iter().any(|arg| arg.contains(placeholder)) {
            return Err(anyhow!(AugmentError::Config(format!(
                "Tool arguments {:?} must reference '{}'.",
                config.tool.args, placeholder
            ))));
        }
    }
    for (key, name) in [
        ("flag.property_group", &config.flag.property_group),
        ("flag.name", &config.flag.name),
    ] {
        if !is_valid_element_name(name) {
            return Err(anyhow!(AugmentError::Config(format!(
                "Invalid XML element name for {}: '{}'.",
                key, name
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}

fn is_valid_element_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '.')
        && !name
            .chars()
            .any(|c| c.is_whitespace() || "<>&\"'/=".contains(c))
}
