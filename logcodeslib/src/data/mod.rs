//! Data collection: scan log text and count status codes.
//!
//! This module handles the second stage of the pipeline - turning raw
//! access-log text into status code counts. It provides:
//!
//! - **Matching**: extract a timestamp and status code from one line
//! - **Ranges**: inclusive, optionally open-ended time windows
//! - **Counts**: code → count mapping plus line accounting
//! - **Processing**: single-pass scan of a text blob or reader
//! - **Scanning**: files on disk, in parallel (`scan_paths`, `scan_file`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use logcodeslib::data::{scan_paths, ScanOptions};
//!
//! let result = scan_paths(&["/var/log/nginx"], ScanOptions::new())?;
//! for (code, count) in result.total.counts.iter() {
//!     println!("{code}: {count}");
//! }
//! ```

pub mod counts;
pub mod matcher;
pub mod processor;
pub mod range;
pub mod scanner;


pub use counts::{ScanReport, ScanStats, StatusCodeCounts};
pub use matcher::{extract_status_code, extract_timestamp, match_line, ExtractedRecord};
pub use processor::{process, scan, scan_reader};
pub use range::{Bound, DateRange};
pub use scanner::{scan_file, scan_paths, FileReport, ScanOptions, ScanResult};
