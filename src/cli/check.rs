//! Conformance fixture command

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::glob;

use crate::config::{loader::resolve_path, LoadedConfig};
use crate::easing::parse;
use crate::fixtures::{load_fixture_file, run_cases, ConformanceReport};
use crate::telemetry::{self, ErrorEntry};

use super::{OutputFormat, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

#[derive(Serialize)]
struct FileReport {
    file: String,
    #[serde(flatten)]
    report: ConformanceReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    load_error: Option<String>,
}

/// Expand glob patterns into a sorted, de-duplicated list of files
pub(crate) fn collect_fixture_files(
    patterns: &[String],
    base: Option<&Path>,
) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for pattern in patterns {
        let full = match base {
            Some(root) => resolve_path(root, Path::new(pattern)),
            None => PathBuf::from(pattern),
        };
        let full = full.to_string_lossy().into_owned();
        let paths = glob(&full).map_err(|e| format!("invalid pattern '{}': {}", pattern, e))?;
        files.extend(paths.filter_map(Result::ok).filter(|p| p.is_file()));
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Execute the check command
pub fn run_check(patterns: &[String], loaded: &LoadedConfig, format: OutputFormat) -> ExitCode {
    let config = &loaded.config;

    // Patterns from the command line are relative to the working directory,
    // patterns from tfn.toml to the directory holding it.
    let files = if patterns.is_empty() {
        collect_fixture_files(&config.check.sources, Some(&loaded.root()))
    } else {
        collect_fixture_files(patterns, None)
    };
    let files = match files {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    if files.is_empty() {
        eprintln!("Error: No fixture files found");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let initial = &config.resolve.initial;
    let fail_fast = config.check.fail_fast;
    let mut total = ConformanceReport::default();
    let mut file_reports = Vec::with_capacity(files.len());
    let mut load_failures = 0;

    for path in &files {
        let display = path.display().to_string();
        let cases = match load_fixture_file(path) {
            Ok(cases) => cases,
            Err(e) => {
                load_failures += 1;
                if format == OutputFormat::Text {
                    eprintln!("Error: {}: {}", display, e);
                }
                file_reports.push(FileReport {
                    file: display,
                    report: ConformanceReport::default(),
                    load_error: Some(e.to_string()),
                });
                if fail_fast {
                    break;
                }
                continue;
            }
        };

        let report = run_cases(&cases, initial, fail_fast);
        for failure in &report.failures {
            if format == OutputFormat::Text {
                println!("FAIL {}:{}", display, failure);
            }
            if let Err(err) = parse(&failure.input) {
                telemetry::log_error(
                    &ErrorEntry::from_rejection("check", &failure.input, &err)
                        .with_file(display.clone()),
                );
            }
        }

        let stop = fail_fast && !report.is_success();
        total.merge(report.clone());
        file_reports.push(FileReport { file: display, report, load_error: None });
        if stop {
            break;
        }
    }

    match format {
        OutputFormat::Text => {
            println!(
                "{} passed, {} failed ({} file{})",
                total.passed,
                total.failed,
                files.len(),
                if files.len() == 1 { "" } else { "s" }
            );
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&file_reports) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
    }

    if total.is_success() && load_failures == 0 {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}
