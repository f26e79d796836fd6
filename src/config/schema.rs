//! Configuration schema types for `tfn.toml`
//!
//! Every section is optional; an empty file is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::easing::EasingFunction;
use crate::resolve::initial_value;

/// How invalid declarations are resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveConfig {
    /// Value substituted for an invalid declaration; any valid easing function
    #[serde(default = "initial_value")]
    pub initial: EasingFunction,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self { initial: initial_value() }
    }
}

/// Error telemetry settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Append rejected declarations to the error log
    #[serde(default)]
    pub collect_errors: bool,
    /// Error log location, relative to the directory holding tfn.toml
    #[serde(default = "default_error_log")]
    pub path: PathBuf,
}

fn default_error_log() -> PathBuf {
    PathBuf::from(".tfn/errors.jsonl")
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { collect_errors: false, path: default_error_log() }
    }
}

/// Conformance fixture settings for `tfn check`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Glob patterns for fixture files
    #[serde(default = "default_check_sources")]
    pub sources: Vec<String>,
    /// Stop at the first failing case
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_check_sources() -> Vec<String> {
    vec!["tests/fixtures/**/*.jsonl".to_string()]
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { sources: default_check_sources(), fail_fast: false }
    }
}

/// Complete tfn.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TfnConfig {
    #[serde(default)]
    pub resolve: ResolveConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub check: CheckConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "check.sources")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tfn.toml: '{}' {}", self.field, self.message)
    }
}

impl TfnConfig {
    /// Validate the configuration and return any errors
    ///
    /// `resolve.initial` needs no check here: deserialization already ran it
    /// through the parser.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.check.sources.is_empty() {
            errors.push(ConfigValidationError {
                field: "check.sources".to_string(),
                message: "must contain at least one glob pattern".to_string(),
            });
        }
        for (i, pattern) in self.check.sources.iter().enumerate() {
            if pattern.trim().is_empty() {
                errors.push(ConfigValidationError {
                    field: format!("check.sources[{}]", i),
                    message: "must be a non-empty glob pattern".to_string(),
                });
            } else if let Err(e) = glob::Pattern::new(pattern) {
                errors.push(ConfigValidationError {
                    field: format!("check.sources[{}]", i),
                    message: format!("is not a valid glob pattern: {}", e),
                });
            }
        }

        if self.telemetry.path.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "telemetry.path".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        errors
    }
}
