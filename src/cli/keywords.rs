//! Keyword listing command

use serde::Serialize;
use std::process::ExitCode;

use crate::easing::TimingKeyword;

use super::{OutputFormat, EXIT_ERROR, EXIT_SUCCESS};

#[derive(Serialize)]
struct KeywordRow {
    keyword: &'static str,
    canonical: String,
}

/// Execute the keywords command
pub fn run_keywords(format: OutputFormat) -> ExitCode {
    let rows: Vec<KeywordRow> = TimingKeyword::ALL
        .into_iter()
        .map(|k| KeywordRow { keyword: k.as_str(), canonical: k.expand().to_canonical_string() })
        .collect();

    match format {
        OutputFormat::Text => {
            let width = rows.iter().map(|r| r.keyword.len()).max().unwrap_or(0);
            for row in &rows {
                println!("{:<width$}  {}", row.keyword, row.canonical, width = width);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&rows) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
    }

    ExitCode::from(EXIT_SUCCESS)
}
