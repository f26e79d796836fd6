//! timing-fn - Parsing and canonicalization of CSS easing functions
//!
//! This library provides functionality to:
//! - Parse `transition-timing-function` values (keywords, `cubic-bezier()`, `steps()`)
//! - Serialize them in the canonical computed-value form
//! - Resolve invalid declarations to the initial value
//! - Run table-driven conformance fixtures

pub mod cli;
pub mod config;
pub mod easing;
pub mod fixtures;
pub mod resolve;
pub mod telemetry;

pub use easing::{parse, EasingFunction, InvalidSyntax, StepPosition, TimingKeyword};
pub use resolve::{initial_value, resolve, Resolution};
