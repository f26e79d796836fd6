//! Table-driven conformance fixtures
//!
//! A fixture file lists declared values next to the computed value a
//! conforming engine reports for them. Each non-blank line is one JSON5
//! object, so rows may carry `//` comments and trailing commas:
//!
//! ```text
//! // keywords expand to their cubic-bezier() form
//! {"input": "ease", "expected": "cubic-bezier(0.25, 0.1, 0.25, 1)"}
//! {"input": "steps(3, top)", "expected": "cubic-bezier(0.25, 0.1, 0.25, 1)", "valid": false}
//! ```
//!
//! `expected` is always the computed value, so a rejected input expects the
//! initial value. `valid` is optional and additionally pins whether the input
//! was accepted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::easing::EasingFunction;
use crate::resolve::resolve;

/// Error loading a fixture file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FixtureError {
    /// The file could not be read
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),
    /// A row is not a valid fixture object
    #[error("line {line}: {message}")]
    Row { line: usize, message: String },
}

/// One row of a fixture table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// The declared value
    pub input: String,
    /// The expected computed value
    pub expected: String,
    /// Whether the input itself should be accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid: Option<bool>,
    /// Free-form note shown when the case fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 1-based source line, filled in by the loader
    #[serde(skip)]
    pub line: usize,
}

impl FixtureCase {
    pub fn new(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self { input: input.into(), expected: expected.into(), valid: None, description: None, line: 0 }
    }

    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = Some(valid);
        self
    }
}

/// A case whose outcome did not match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseFailure {
    pub line: usize,
    pub input: String,
    pub expected: String,
    pub actual: String,
    /// `Some(expected_validity)` when the failure is about acceptance
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl std::fmt::Display for CaseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: '{}'", self.line, self.input)?;
        if let Some(valid) = self.expected_valid {
            let expectation = if valid { "accepted" } else { "rejected" };
            write!(f, " should be {}", expectation)?;
            if let Some(reason) = &self.rejection {
                write!(f, " ({})", reason)?;
            }
        } else {
            write!(f, " computed '{}', expected '{}'", self.actual, self.expected)?;
        }
        if let Some(desc) = &self.description {
            write!(f, " [{}]", desc)?;
        }
        Ok(())
    }
}

/// Summary of a fixture run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConformanceReport {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

impl ConformanceReport {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: ConformanceReport) {
        self.passed += other.passed;
        self.failed += other.failed;
        self.failures.extend(other.failures);
    }
}

/// Parse fixture rows from text.
///
/// Blank lines and lines that are only a `//` comment are skipped.
pub fn load_fixture_str(content: &str) -> Result<Vec<FixtureCase>, FixtureError> {
    let mut cases = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }

        let mut case: FixtureCase = json5::from_str(trimmed)
            .map_err(|e| FixtureError::Row { line, message: e.to_string() })?;
        case.line = line;
        cases.push(case);
    }

    Ok(cases)
}

/// Read and parse a fixture file
pub fn load_fixture_file(path: &Path) -> Result<Vec<FixtureCase>, FixtureError> {
    let content = fs::read_to_string(path)?;
    load_fixture_str(&content)
}

/// Check a single case against the resolver
pub fn check_case(case: &FixtureCase, initial: &EasingFunction) -> Result<(), CaseFailure> {
    let resolution = resolve(&case.input, initial);
    let actual = resolution.computed_string();
    let accepted = !resolution.is_fallback();

    let validity_mismatch = case.valid.filter(|&valid| valid != accepted);
    if actual == case.expected && validity_mismatch.is_none() {
        return Ok(());
    }

    Err(CaseFailure {
        line: case.line,
        input: case.input.clone(),
        expected: case.expected.clone(),
        actual,
        expected_valid: validity_mismatch,
        rejection: resolution.rejected.map(|e| e.to_string()),
        description: case.description.clone(),
    })
}

/// Run every case, stopping at the first failure when `fail_fast` is set
pub fn run_cases(
    cases: &[FixtureCase],
    initial: &EasingFunction,
    fail_fast: bool,
) -> ConformanceReport {
    let mut report = ConformanceReport::default();

    for case in cases {
        match check_case(case, initial) {
            Ok(()) => report.passed += 1,
            Err(failure) => {
                report.failed += 1;
                report.failures.push(failure);
                if fail_fast {
                    break;
                }
            }
        }
    }

    report
}
