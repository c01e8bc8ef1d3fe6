//! High-level scanning API.
//!
//! This module provides the main entry points for counting status codes
//! across log files on disk, with glob filtering and parallel scanning.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::LogcodesError;
use crate::source::filter::{discover_files_in_paths, FilterConfig};
use crate::Result;

use super::counts::ScanReport;
use super::processor::scan_reader;
use super::range::DateRange;

/// Options for scanning log files.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Time window applied to every line
    pub range: DateRange,
    /// File filter configuration
    pub file_filter: FilterConfig,
    /// Keep one report per file in the result
    pub per_file: bool,
}

impl ScanOptions {
    /// Create new default options (no time window, every file, totals only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the time window.
    pub fn range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Keep per-file reports.
    pub fn per_file(mut self, per_file: bool) -> Self {
        self.per_file = per_file;
        self
    }
}

/// Report for a single scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Path to the file.
    pub path: PathBuf,
    /// Counts and line accounting for this file.
    pub report: ScanReport,
}

/// Result of scanning one or more files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    /// Number of files scanned
    pub file_count: usize,
    /// Time window that was applied
    pub range: DateRange,
    /// Merged counts and line accounting across all files
    pub total: ScanReport,
    /// Per-file reports (if requested)
    pub files: Vec<FileReport>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a result from per-file reports, merging them in the given order.
    pub fn from_reports(range: DateRange, reports: Vec<FileReport>, keep_files: bool) -> Self {
        let mut result = ScanResult {
            file_count: reports.len(),
            range,
            ..Self::default()
        };

        for file in &reports {
            result.total += &file.report;
        }

        if keep_files {
            result.files = reports;
        }

        result
    }
}

/// Scan a single log file.
pub fn scan_file(path: impl AsRef<Path>, range: &DateRange) -> Result<ScanReport> {
    let path = path.as_ref();
    let read_err = |source: std::io::Error| LogcodesError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let report = scan_reader(BufReader::new(file), range).map_err(|e| match e {
        LogcodesError::Io(source) => read_err(source),
        other => other,
    })?;

    debug!(path = %path.display(), accepted = report.stats.accepted, "scanned file");
    Ok(report)
}

/// Scan every log file found under `paths`.
///
/// Files are discovered with the options' filter, scanned in parallel and
/// merged in discovery order, so the order of codes in the total is the
/// same on every run.
///
/// # Example
///
/// ```rust
/// use logcodeslib::{scan_paths, ScanOptions};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(
///     dir.path().join("access.log"),
///     "[10/Jan/2023:12:00:00 +0000] \"GET / HTTP/1.1\" 200 512\n",
/// )
/// .unwrap();
/// fs::write(
///     dir.path().join("access.log.1"),
///     "[09/Jan/2023:08:30:00 +0000] \"GET /a HTTP/1.1\" 503 0\n",
/// )
/// .unwrap();
///
/// let result = scan_paths(&[dir.path()], ScanOptions::new()).unwrap();
/// assert_eq!(result.file_count, 2);
/// assert_eq!(result.total.counts.get("200"), 1);
/// assert_eq!(result.total.counts.get("503"), 1);
/// ```
pub fn scan_paths<P: AsRef<Path>>(paths: &[P], options: ScanOptions) -> Result<ScanResult> {
    let files = discover_files_in_paths(paths, &options.file_filter)?;
    debug!(files = files.len(), "discovered log files");

    let range = options.range;
    let reports = files
        .into_par_iter()
        .map(|path| {
            let report = scan_file(&path, &range)?;
            Ok(FileReport { path, report })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ScanResult::from_reports(range, reports, options.per_file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::processor::scan;
    use crate::data::range::Bound;
    use std::fs;
    use tempfile::tempdir;

    fn write_log(path: &Path, lines: &[(&str, &str)]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        let content: String = lines
            .iter()
            .map(|(ts, code)| format!("[{ts} +0000] \"GET / HTTP/1.1\" {code} 1\n"))
            .collect();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_scan_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("access.log");
        write_log(
            &file,
            &[("10/Jan/2023:12:00:00", "200"), ("10/Jan/2023:12:00:01", "301")],
        );

        let report = scan_file(&file, &DateRange::all()).unwrap();
        assert_eq!(report.counts.get("200"), 1);
        assert_eq!(report.counts.get("301"), 1);
        assert_eq!(report.stats.lines, 2);
    }

    #[test]
    fn test_scan_file_missing() {
        let err = scan_file("/nonexistent/access.log", &DateRange::all()).unwrap_err();
        assert!(matches!(err, LogcodesError::FileRead { .. }));
    }

    #[test]
    fn test_scan_paths_merges_in_discovery_order() {
        let temp = tempdir().unwrap();
        write_log(&temp.path().join("a.log"), &[("10/Jan/2023:12:00:00", "404")]);
        write_log(
            &temp.path().join("b.log"),
            &[("10/Jan/2023:12:00:00", "200"), ("10/Jan/2023:12:00:00", "404")],
        );

        let result = scan_paths(&[temp.path()], ScanOptions::new()).unwrap();

        assert_eq!(result.file_count, 2);
        assert!(result.files.is_empty());
        assert_eq!(
            result.total.counts.iter().collect::<Vec<_>>(),
            vec![("404", 2), ("200", 1)]
        );
        assert_eq!(result.total.stats.lines, 3);
    }

    #[test]
    fn test_scan_paths_per_file() {
        let temp = tempdir().unwrap();
        write_log(&temp.path().join("a.log"), &[("10/Jan/2023:12:00:00", "200")]);
        write_log(&temp.path().join("b.log"), &[("10/Jan/2023:12:00:00", "500")]);

        let result = scan_paths(&[temp.path()], ScanOptions::new().per_file(true)).unwrap();

        assert_eq!(result.files.len(), 2);
        assert!(result.files[0].path.ends_with("a.log"));
        assert_eq!(result.files[0].report.counts.get("200"), 1);
        assert!(result.files[1].path.ends_with("b.log"));
        assert_eq!(result.files[1].report.counts.get("500"), 1);
    }

    #[test]
    fn test_scan_paths_with_range_and_filter() {
        let temp = tempdir().unwrap();
        write_log(
            &temp.path().join("access.log"),
            &[("09/Jan/2023:23:59:59", "200"), ("10/Jan/2023:00:00:00", "404")],
        );
        write_log(&temp.path().join("error.log"), &[("10/Jan/2023:12:00:00", "500")]);

        let start = DateRange::parse_bound("2023-01-10", Bound::Start).unwrap();
        let range = DateRange::all().since(start);
        let filter = FilterConfig::new().exclude("**/error.log").unwrap();
        let options = ScanOptions::new().range(range).filter(filter);

        let result = scan_paths(&[temp.path()], options).unwrap();

        assert_eq!(result.file_count, 1);
        assert_eq!(result.range, range);
        assert_eq!(result.total.counts.iter().collect::<Vec<_>>(), vec![("404", 1)]);
        assert_eq!(result.total.stats.out_of_range, 1);
    }

    #[test]
    fn test_scan_paths_equals_concatenated_scan() {
        let temp = tempdir().unwrap();
        let a = [("10/Jan/2023:12:00:00", "200"), ("10/Jan/2023:12:00:00", "302")];
        let b = [("10/Jan/2023:12:00:00", "302"), ("10/Jan/2023:12:00:00", "418")];
        write_log(&temp.path().join("a.log"), &a);
        write_log(&temp.path().join("b.log"), &b);

        let result = scan_paths(&[temp.path()], ScanOptions::new()).unwrap();

        let concatenated = fs::read_to_string(temp.path().join("a.log")).unwrap()
            + &fs::read_to_string(temp.path().join("b.log")).unwrap();
        let whole = scan(&concatenated, &DateRange::all());

        assert_eq!(result.total, whole);
    }

    #[test]
    fn test_scan_paths_missing_root() {
        let err = scan_paths(&["/nonexistent/logs"], ScanOptions::new()).unwrap_err();
        assert!(matches!(err, LogcodesError::PathNotFound(_)));
    }
}
