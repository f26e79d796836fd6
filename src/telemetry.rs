//! Local error telemetry for tfn
//!
//! Records rejected declarations in JSONL format so recurring mistakes can be
//! found later. Only the offending value and the rejection reason are stored.

use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::easing::InvalidSyntax;

/// One rejected value in the telemetry log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// ISO 8601 timestamp when the rejection happened
    pub timestamp: String,
    /// The command that was running (e.g., "parse", "resolve")
    pub command: String,
    /// The declared value that was rejected
    pub input: String,
    /// The fixture or source file, if the value came from one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// Rejection code (see [`InvalidSyntax::code`])
    pub error_type: String,
    /// Human-readable rejection message
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorEntry {
    /// Create a new entry stamped with the current time
    pub fn new(
        command: impl Into<String>,
        input: impl Into<String>,
        error_type: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: utc_timestamp(),
            command: command.into(),
            input: input.into(),
            file: None,
            error_type: error_type.into(),
            context: context.into(),
            suggestion: None,
        }
    }

    /// Build an entry from a parse rejection
    pub fn from_rejection(command: &str, input: &str, err: &InvalidSyntax) -> Self {
        let mut entry = Self::new(command, input, err.code(), err.to_string());
        entry.suggestion = err.suggestion().map(str::to_string);
        entry
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`
fn utc_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    let rem = secs % 86_400;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        rem / 3600,
        (rem % 3600) / 60,
        rem % 60
    )
}

/// Days since 1970-01-01 to a (year, month, day) date in the proleptic Gregorian calendar
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Error collector that appends to a JSONL file
pub struct ErrorCollector {
    path: PathBuf,
    enabled: bool,
}

impl ErrorCollector {
    pub fn new(path: impl AsRef<Path>, enabled: bool) -> Self {
        Self { path: path.as_ref().to_path_buf(), enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry, creating the log and its directory on first use
    pub fn log(&self, entry: &ErrorEntry) -> std::io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        writeln!(writer, "{}", json)?;
        writer.flush()
    }
}

// Global error collector (thread-local to avoid synchronization)
thread_local! {
    static COLLECTOR: std::cell::RefCell<Option<ErrorCollector>> = const { std::cell::RefCell::new(None) };
}

/// Initialize the global error collector
pub fn init_collector(path: impl AsRef<Path>, enabled: bool) {
    COLLECTOR.with(|c| {
        *c.borrow_mut() = Some(ErrorCollector::new(path, enabled));
    });
}

/// Log an entry using the global collector; failures to write are reported
/// on stderr and otherwise ignored
pub fn log_error(entry: &ErrorEntry) {
    COLLECTOR.with(|c| {
        if let Some(ref collector) = *c.borrow() {
            if let Err(e) = collector.log(entry) {
                eprintln!(
                    "Warning: cannot write error log '{}': {}",
                    collector.path().display(),
                    e
                );
            }
        }
    });
}

/// Check if the global collector is enabled
pub fn is_collection_enabled() -> bool {
    COLLECTOR.with(|c| c.borrow().as_ref().map(|c| c.is_enabled()).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::parse;
    use tempfile::TempDir;

    #[test]
    fn test_error_entry_creation() {
        let entry = ErrorEntry::new("parse", "bounce", "unknown_keyword", "unknown timing keyword");
        assert_eq!(entry.command, "parse");
        assert_eq!(entry.input, "bounce");
        assert_eq!(entry.error_type, "unknown_keyword");
        assert!(entry.file.is_none());
        assert!(entry.suggestion.is_none());
    }

    #[test]
    fn test_entry_from_rejection() {
        let err = parse("cubic-bezier(1.5, 0, 0.5, 1)").unwrap_err();
        let entry = ErrorEntry::from_rejection("resolve", "cubic-bezier(1.5, 0, 0.5, 1)", &err)
            .with_file("fixtures/bad.jsonl");
        assert_eq!(entry.error_type, "control_point_out_of_range");
        assert!(entry.context.contains("x1"));
        assert!(entry.suggestion.is_some());
        assert_eq!(entry.file.as_deref(), Some("fixtures/bad.jsonl"));
    }

    #[test]
    fn test_error_collector_disabled() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("errors.jsonl");

        let collector = ErrorCollector::new(&path, false);
        collector.log(&ErrorEntry::new("parse", "x", "t", "c")).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_error_collector_creates_directory_and_appends() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".tfn").join("errors.jsonl");

        let collector = ErrorCollector::new(&path, true);
        collector.log(&ErrorEntry::new("parse", "steps(0)", "e1", "c1")).unwrap();
        collector
            .log(&ErrorEntry::new("resolve", "steps(3, top)", "e2", "c2").with_suggestion("s"))
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: ErrorEntry = serde_json::from_str(lines[0]).unwrap();
        let second: ErrorEntry = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first.input, "steps(0)");
        assert_eq!(second.command, "resolve");
        assert_eq!(second.suggestion.as_deref(), Some("s"));
        assert!(!lines[0].contains("suggestion"));
    }

    #[test]
    fn test_global_collector() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("global.jsonl");

        init_collector(&path, true);
        assert!(is_collection_enabled());
        log_error(&ErrorEntry::new("parse", "x", "t", "c"));
        assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 1);

        init_collector(&path, false);
        assert!(!is_collection_enabled());
    }

    #[test]
    fn test_civil_from_days() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(59), (1970, 3, 1));
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
        assert_eq!(civil_from_days(20_742), (2026, 10, 16));
    }

    #[test]
    fn test_timestamp_format() {
        let timestamp = utc_timestamp();
        assert_eq!(timestamp.len(), 20);
        assert_eq!(&timestamp[10..11], "T");
        assert!(timestamp.ends_with('Z'));
    }
}
