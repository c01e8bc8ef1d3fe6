//! # logcodeslib
//!
//! A library for counting HTTP response status codes in web server access
//! logs, optionally restricted to an inclusive time window.
//!
//! ## Overview
//!
//! Access logs in the common and combined formats carry, on every request
//! line, a bracketed timestamp and the status code that followed the quoted
//! request:
//!
//! ```text
//! 10.0.0.1 - - [10/Jan/2023:12:00:00 +0000] "GET / HTTP/1.1" 200 512
//! ```
//!
//! This library scans such text line by line, extracts both fields, keeps
//! the lines whose timestamp falls inside a [`DateRange`], and returns a
//! [`StatusCodeCounts`] mapping each code to its number of occurrences.
//! Lines that don't look like access-log entries are skipped, never
//! treated as errors.
//!
//! ## Pipeline
//!
//! - **source**: discover log files with include/exclude glob patterns
//! - **data**: match lines, filter by time, count codes, scan files in parallel
//! - **query**: group rows by code, status class or file, and sort them
//! - **output**: format rows into a table for templates or JSON
//!
//! ## Features
//!
//! - **Best-effort extraction**: blank, truncated or foreign lines are counted as skipped
//! - **Open-ended windows**: either bound of the time range may be omitted
//! - **Mergeable results**: counts from independent scans add up key-wise
//! - **Pure data types**: the core takes text and returns data, no I/O side effects
//!
//! ## Example
//!
//! ```rust
//! use logcodeslib::{process, scan, Bound, DateRange};
//!
//! let log = "\
//! [10/Jan/2023:12:00:00 +0000] \"GET / HTTP/1.1\" 200 512
//! [10/Jan/2023:12:00:05 +0000] \"GET /gone HTTP/1.1\" 404 0
//! ";
//!
//! // Every line
//! let counts = process(log, None);
//! assert_eq!(counts.iter().collect::<Vec<_>>(), vec![("200", 1), ("404", 1)]);
//!
//! // Only from 12:00:01 on
//! let start = DateRange::parse_bound("2023-01-10T12:00:01Z", Bound::Start).unwrap();
//! let report = scan(log, &DateRange::all().since(start));
//! assert_eq!(report.counts.get("404"), 1);
//! assert_eq!(report.stats.out_of_range, 1);
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    extract_status_code, extract_timestamp, match_line, process, scan, scan_file, scan_paths,
    scan_reader, Bound, DateRange, ExtractedRecord, FileReport, ScanOptions, ScanReport,
    ScanResult, ScanStats, StatusCodeCounts,
};
pub use error::LogcodesError;
pub use output::{CodeTable, TableRow};
pub use query::{
    Aggregation, CodeQuerySet, OrderBy, OrderDirection, Ordering, QueryItem, StatusClass,
};
pub use source::{discover_files, discover_files_in_paths, FilterConfig};

/// Result type for logcodeslib operations
pub type Result<T> = std::result::Result<T, LogcodesError>;
