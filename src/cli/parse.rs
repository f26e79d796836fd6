//! Value commands (parse, resolve)

use serde::Serialize;
use std::process::ExitCode;

use crate::easing::{parse, EasingFunction, InvalidSyntax};
use crate::resolve::resolve;
use crate::telemetry::{self, ErrorEntry};

use super::{OutputFormat, EXIT_ERROR, EXIT_SUCCESS};

/// JSON shape of one parsed value
#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    input: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_type: Option<&'static str>,
}

/// JSON shape of one resolved value
#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    specified: &'a str,
    computed: String,
    fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn report_rejection(command: &str, value: &str, err: &InvalidSyntax) {
    telemetry::log_error(&ErrorEntry::from_rejection(command, value, err));
}

fn print_json<T: Serialize>(value: &T) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            true
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            false
        }
    }
}

/// Execute the parse command
pub fn run_parse(values: &[String], format: OutputFormat) -> ExitCode {
    let mut reports = Vec::with_capacity(values.len());
    let mut any_invalid = false;

    for value in values {
        match parse(value) {
            Ok(easing) => reports.push(ParseReport {
                input: value,
                valid: true,
                canonical: Some(easing.to_canonical_string()),
                keyword: easing.keyword().map(|k| k.as_str()),
                error: None,
                error_type: None,
            }),
            Err(err) => {
                any_invalid = true;
                report_rejection("parse", value, &err);
                reports.push(ParseReport {
                    input: value,
                    valid: false,
                    canonical: None,
                    keyword: None,
                    error: Some(err.to_string()),
                    error_type: Some(err.code()),
                });
                if format == OutputFormat::Text {
                    eprintln!("Error: '{}': {}", value, err);
                    if let Some(hint) = err.suggestion() {
                        eprintln!("  hint: {}", hint);
                    }
                }
            }
        }
    }

    match format {
        OutputFormat::Text => {
            for report in reports.iter() {
                if let Some(canonical) = &report.canonical {
                    println!("{}", canonical);
                }
            }
        }
        OutputFormat::Json => {
            if !print_json(&reports) {
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    if any_invalid {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}

/// Execute the resolve command
///
/// Invalid values are not an error here: they resolve to `initial`, which is
/// what a style engine does with an invalid declaration.
pub fn run_resolve(values: &[String], initial: &EasingFunction, format: OutputFormat) -> ExitCode {
    let mut reports = Vec::with_capacity(values.len());

    for value in values {
        let resolution = resolve(value, initial);
        if let Some(err) = &resolution.rejected {
            report_rejection("resolve", value, err);
            if format == OutputFormat::Text {
                eprintln!(
                    "Warning: '{}' is invalid ({}); using initial value {}",
                    value, err, initial
                );
            }
        }

        reports.push(ResolveReport {
            specified: value,
            computed: resolution.computed_string(),
            fallback: resolution.is_fallback(),
            error: resolution.rejected.as_ref().map(|e| e.to_string()),
        });
    }

    match format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report.computed);
            }
        }
        OutputFormat::Json => {
            if !print_json(&reports) {
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
