//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod keywords;
mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides, LoadedConfig};
use crate::easing::EasingFunction;
use crate::telemetry;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per value
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// tfn - Parse and canonicalize CSS transition-timing-function values
#[derive(Parser)]
#[command(name = "tfn")]
#[command(about = "Parse and canonicalize CSS transition-timing-function values")]
#[command(version)]
pub struct Cli {
    /// Path to tfn.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Append rejected values to the error log
    #[arg(long, global = true)]
    pub collect_errors: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse values and print their canonical form
    Parse {
        /// Values such as "ease-in" or "steps(3, start)"
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Resolve values to their computed form, substituting the initial value for invalid ones
    Resolve {
        /// Values such as "ease-in" or "steps(3, start)"
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,

        /// Initial value used for invalid declarations (default: from tfn.toml, else ease)
        #[arg(long, value_parser = parse_easing_arg)]
        initial: Option<EasingFunction>,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Run conformance fixture files
    Check {
        /// Fixture files or glob patterns (default: check.sources from tfn.toml)
        patterns: Vec<String>,

        /// Stop at the first failing case
        #[arg(long)]
        fail_fast: bool,

        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List the timing keywords and their canonical forms
    Keywords {
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn parse_easing_arg(value: &str) -> Result<EasingFunction, String> {
    value.parse::<EasingFunction>().map_err(|e| e.to_string())
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let mut loaded = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let overrides = CliOverrides {
        initial: match &cli.command {
            Commands::Resolve { initial, .. } => *initial,
            _ => None,
        },
        fail_fast: match &cli.command {
            Commands::Check { fail_fast: true, .. } => Some(true),
            _ => None,
        },
        collect_errors: cli.collect_errors.then_some(true),
    };
    merge_cli_overrides(&mut loaded.config, &overrides);
    init_telemetry(&loaded);

    match cli.command {
        Commands::Parse { values, format } => parse::run_parse(&values, format),
        Commands::Resolve { values, format, .. } => {
            parse::run_resolve(&values, &loaded.config.resolve.initial, format)
        }
        Commands::Check { patterns, format, .. } => check::run_check(&patterns, &loaded, format),
        Commands::Keywords { format } => keywords::run_keywords(format),
    }
}

fn init_telemetry(loaded: &LoadedConfig) {
    if loaded.config.telemetry.collect_errors {
        telemetry::init_collector(loaded.error_log_path(), true);
    }
}
