//! Configuration loading and discovery for `tfn.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::TfnConfig;
use crate::easing::EasingFunction;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file searched for
pub const CONFIG_FILE: &str = "tfn.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error, including an invalid `resolve.initial`
    #[error("Failed to parse tfn.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the initial value used for invalid declarations
    pub initial: Option<EasingFunction>,
    /// Stop `check` at the first failure
    pub fail_fast: Option<bool>,
    /// Enable error collection
    pub collect_errors: Option<bool>,
}

/// A loaded configuration and the file it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: TfnConfig,
    /// `None` when running on defaults
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Directory relative paths in the config are resolved against
    pub fn root(&self) -> PathBuf {
        self.path
            .as_deref()
            .and_then(project_root)
            .map(Path::to_path_buf)
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Absolute location of the telemetry log
    pub fn error_log_path(&self) -> PathBuf {
        resolve_path(&self.root(), &self.config.telemetry.path)
    }
}

/// Find tfn.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for tfn.toml
/// 2. Check XDG_CONFIG_HOME/timing-fn/tfn.toml (or ~/.config/timing-fn/tfn.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find tfn.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("timing-fn").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find tfn.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a tfn.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the defaults.
///
/// # Example
/// ```ignore
/// let loaded = load_config(None)?;
/// let initial = loaded.config.resolve.initial;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            let config = load_config_file(&p)?;
            Ok(LoadedConfig { config, path: Some(p) })
        }
        None => Ok(LoadedConfig { config: TfnConfig::default(), path: None }),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<TfnConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: TfnConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut TfnConfig, overrides: &CliOverrides) {
    if let Some(initial) = overrides.initial {
        config.resolve.initial = initial;
    }

    if let Some(fail_fast) = overrides.fail_fast {
        config.check.fail_fast = fail_fast;
    }

    if let Some(collect_errors) = overrides.collect_errors {
        config.telemetry.collect_errors = collect_errors;
    }
}

/// Get the project root directory from a config file path.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
