//! Single-pass scanning of access-log text.
//!
//! A scan walks the input line by line, extracts a record from each line
//! with [`match_line`], keeps the records that fall inside the requested
//! [`DateRange`] and counts their status codes. Lines that cannot be read
//! as access-log entries are skipped, never reported as errors.
//!
//! Scans hold no shared state: each call builds its own counts, so scanning
//! several inputs concurrently is safe and their reports can be merged.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::Result;

use super::counts::{ScanReport, StatusCodeCounts};
use super::matcher::match_line;
use super::range::DateRange;

/// Count status codes in `text`, optionally restricted to a time window.
///
/// Passing `None` (or an unbounded range) counts every line that carries
/// a timestamp and a status code.
///
/// # Example
///
/// ```rust
/// use logcodeslib::process;
///
/// let log = "\
/// 10.0.0.1 - - [10/Jan/2023:12:00:00 +0000] \"GET / HTTP/1.1\" 200 512
/// 10.0.0.2 - - [10/Jan/2023:12:00:05 +0000] \"GET /missing HTTP/1.1\" 404 0
/// garbage line
/// ";
///
/// let counts = process(log, None);
/// assert_eq!(counts.get("200"), 1);
/// assert_eq!(counts.get("404"), 1);
/// assert_eq!(counts.total(), 2);
/// ```
pub fn process(text: &str, range: Option<&DateRange>) -> StatusCodeCounts {
    let range = range.copied().unwrap_or_default();
    scan(text, &range).counts
}

/// Scan `text` and report both the counts and the line accounting.
pub fn scan(text: &str, range: &DateRange) -> ScanReport {
    let mut scanner = LineScanner::new(range);
    for line in text.lines() {
        scanner.feed(line);
    }
    scanner.finish()
}

/// Scan lines from a reader without loading the whole input.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected; only
/// I/O failures are returned as errors.
pub fn scan_reader<R: BufRead>(mut reader: R, range: &DateRange) -> Result<ScanReport> {
    let mut scanner = LineScanner::new(range);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        scanner.feed(trim_line_ending(&line));
    }

    Ok(scanner.finish())
}

/// Strip one `\n` and an optional preceding `\r`.
fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Per-scan state: the range being applied and the report built so far.
struct LineScanner<'r> {
    range: &'r DateRange,
    report: ScanReport,
}

impl<'r> LineScanner<'r> {
    fn new(range: &'r DateRange) -> Self {
        Self {
            range,
            report: ScanReport::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        let stats = &mut self.report.stats;
        stats.lines += 1;

        let Some(record) = match_line(line) else {
            stats.unmatched += 1;
            trace!(line_no = stats.lines, "no timestamp/status match");
            return;
        };

        if !self.range.contains(&record.timestamp) {
            stats.out_of_range += 1;
            return;
        }

        stats.accepted += 1;
        self.report.counts.increment(&record.status_code);
    }

    fn finish(self) -> ScanReport {
        let stats = &self.report.stats;
        debug!(
            lines = stats.lines,
            accepted = stats.accepted,
            unmatched = stats.unmatched,
            out_of_range = stats.out_of_range,
            codes = self.report.counts.len(),
            "scan finished"
        );
        self.report
    }
}
