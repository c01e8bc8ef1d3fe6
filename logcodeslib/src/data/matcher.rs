//! Line matching: pull a timestamp and a status code out of one log line.
//!
//! Two fixed patterns are recognized, anywhere in the line:
//!
//! - **Timestamp**: a bracketed `[DD/Mon/YYYY:HH:MM:SS`, as written by the
//!   common and combined log formats (`[10/Jan/2023:12:00:00 +0000]`). The
//!   zone suffix is ignored and the time is read as UTC.
//! - **Status code**: the digit run that follows `HTTP/1.1" `, i.e. the first
//!   field after the quoted request line.
//!
//! A line that lacks either pattern, or whose timestamp is not a real
//! calendar value, yields no record. Matching never fails loudly.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};
use regex::Regex;
use serde::Serialize;

static TIMESTAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([0-9]{2}/[A-Za-z]+/[0-9]{4}):([0-9]{2}:[0-9]{2}:[0-9]{2})")
        .expect("valid timestamp regex")
});

static STATUS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"HTTP/1\.1" ([0-9]+)"#).expect("valid status regex"));

/// `%B` parses full month names and their three-letter abbreviations,
/// case-insensitively.
const TIMESTAMP_FORMAT: &str = "%d/%B/%Y %H:%M:%S";

/// A timestamp and status code extracted from a single log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedRecord {
    /// When the request was logged, in UTC.
    pub timestamp: DateTime<Utc>,
    /// The status code exactly as written (e.g. "200", "404", "0200").
    pub status_code: String,
}

/// Extract a record from a single line.
///
/// Returns `None` when the line has no bracketed timestamp, when the
/// timestamp is not a valid calendar value, or when no `HTTP/1.1" <digits>`
/// segment follows.
///
/// # Example
///
/// ```rust
/// use logcodeslib::match_line;
///
/// let record = match_line(r#"1.2.3.4 - - [10/Jan/2023:12:00:00 +0000] "GET / HTTP/1.1" 200 512"#)
///     .unwrap();
/// assert_eq!(record.status_code, "200");
/// assert_eq!(record.timestamp.to_rfc3339(), "2023-01-10T12:00:00+00:00");
///
/// assert!(match_line("not an access log line").is_none());
/// ```
pub fn match_line(line: &str) -> Option<ExtractedRecord> {
    let timestamp = extract_timestamp(line)?;
    let status_code = extract_status_code(line)?;

    Some(ExtractedRecord {
        timestamp,
        status_code: status_code.to_string(),
    })
}

/// Find and parse the bracketed timestamp of a line.
pub fn extract_timestamp(line: &str) -> Option<DateTime<Utc>> {
    let caps = TIMESTAMP_REGEX.captures(line)?;
    let date = caps.get(1)?.as_str();
    let time = caps.get(2)?.as_str();

    let naive = NaiveDateTime::parse_from_str(&format!("{date} {time}"), TIMESTAMP_FORMAT).ok()?;
    // chrono accepts second 60 as a leap second.
    if naive.nanosecond() >= 1_000_000_000 {
        return None;
    }
    Some(Utc.from_utc_datetime(&naive))
}

/// Find the status code digits that follow the request line.
pub fn extract_status_code(line: &str) -> Option<&str> {
    STATUS_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
