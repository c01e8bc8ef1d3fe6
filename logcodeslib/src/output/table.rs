//! Table-ready data structures for status code output.
//!
//! This module provides `CodeTable`, a presentation-ready data structure
//! that can be directly consumed by templates or serialized to JSON.
//!
//! The data flow is:
//! 1. Raw Data (ScanResult)
//! 2. QuerySet (grouped, sorted)
//! 3. CodeTable (formatted strings for display)
//!
//! CodeTable is a pure presentation layer - it only formats data, no
//! grouping or sorting logic.

use serde::{Deserialize, Serialize};

use crate::data::range::DateRange;
use crate::query::options::Aggregation;
use crate::query::queryset::CodeQuerySet;

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (status code, class, path, "Total (...)")
    pub label: String,
    /// Values for each column after the label (count, share)
    pub values: Vec<String>,
    /// Style name for the row, when it maps to a status class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// Table-ready status code data.
///
/// Templates iterate over headers/rows/footer and apply formatting - no
/// computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeTable {
    /// Optional title describing the time window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Column headers: [label_header, "Count", "Share"]
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<TableRow>,
    /// Summary/footer row
    pub footer: TableRow,
}

impl CodeTable {
    /// Create a CodeTable from a CodeQuerySet.
    pub fn from_queryset(qs: &CodeQuerySet) -> Self {
        let label_header = match qs.aggregation {
            Aggregation::ByCode => "Code",
            Aggregation::ByClass => "Class",
            Aggregation::ByFile => "File",
        };
        let headers = vec![
            label_header.to_string(),
            "Count".to_string(),
            "Share".to_string(),
        ];

        let rows = qs
            .items
            .iter()
            .map(|item| TableRow {
                label: item.label.clone(),
                values: vec![item.count.to_string(), format_share(item.count, qs.total)],
                style: item.class.map(|c| c.style().to_string()),
            })
            .collect();

        let footer = TableRow {
            label: build_footer_label(qs),
            values: vec![qs.total.to_string(), format_share(qs.total, qs.total)],
            style: None,
        };

        CodeTable {
            title: build_title(&qs.range),
            headers,
            rows,
            footer,
        }
    }
}

/// Percentage of `total` with one decimal. A zero total renders as 0.0%.
fn format_share(count: u64, total: u64) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}

fn build_footer_label(qs: &CodeQuerySet) -> String {
    let files = if qs.file_count == 1 { "file" } else { "files" };
    format!(
        "Total ({} lines, {} skipped, {} {})",
        qs.stats.lines,
        qs.stats.skipped(),
        qs.file_count,
        files
    )
}

fn build_title(range: &DateRange) -> Option<String> {
    const FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
    match (range.start, range.end) {
        (None, None) => None,
        (Some(start), None) => Some(format!("Since {}", start.format(FORMAT))),
        (None, Some(end)) => Some(format!("Until {}", end.format(FORMAT))),
        (Some(start), Some(end)) => Some(format!(
            "From {} to {}",
            start.format(FORMAT),
            end.format(FORMAT)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::counts::ScanStats;
    use crate::data::range::Bound;
    use crate::query::class::StatusClass;
    use crate::query::queryset::QueryItem;

    fn queryset(aggregation: Aggregation, items: Vec<(&str, u64)>) -> CodeQuerySet {
        let total = items.iter().map(|(_, c)| c).sum::<u64>();
        CodeQuerySet {
            aggregation,
            range: DateRange::all(),
            items: items
                .into_iter()
                .map(|(label, count)| QueryItem {
                    label: label.to_string(),
                    count,
                    class: Some(StatusClass::of(label)),
                })
                .collect(),
            total,
            stats: ScanStats {
                lines: total + 2,
                unmatched: 2,
                out_of_range: 0,
                accepted: total,
            },
            file_count: 1,
        }
    }

    #[test]
    fn test_table_from_codes() {
        let qs = queryset(Aggregation::ByCode, vec![("200", 3), ("404", 1)]);
        let table = CodeTable::from_queryset(&qs);

        assert_eq!(table.headers, vec!["Code", "Count", "Share"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].label, "200");
        assert_eq!(table.rows[0].values, vec!["3", "75.0%"]);
        assert_eq!(table.rows[0].style.as_deref(), Some("success"));
        assert_eq!(table.rows[1].values, vec!["1", "25.0%"]);
        assert_eq!(table.rows[1].style.as_deref(), Some("client_error"));
        assert_eq!(table.footer.label, "Total (6 lines, 2 skipped, 1 file)");
        assert_eq!(table.footer.values, vec!["4", "100.0%"]);
        assert!(table.title.is_none());
    }

    #[test]
    fn test_table_headers_by_aggregation() {
        let table = CodeTable::from_queryset(&queryset(Aggregation::ByClass, vec![]));
        assert_eq!(table.headers[0], "Class");
        let table = CodeTable::from_queryset(&queryset(Aggregation::ByFile, vec![]));
        assert_eq!(table.headers[0], "File");
    }

    #[test]
    fn test_empty_table() {
        let table = CodeTable::from_queryset(&queryset(Aggregation::ByCode, vec![]));
        assert!(table.rows.is_empty());
        assert_eq!(table.footer.values, vec!["0", "0.0%"]);
    }

    #[test]
    fn test_share_rounding() {
        assert_eq!(format_share(1, 3), "33.3%");
        assert_eq!(format_share(2, 3), "66.7%");
        assert_eq!(format_share(0, 5), "0.0%");
    }

    #[test]
    fn test_title_from_range() {
        let start = DateRange::parse_bound("2023-01-10", Bound::Start).unwrap();
        let end = DateRange::parse_bound("2023-01-11", Bound::End).unwrap();

        assert_eq!(
            build_title(&DateRange::all().since(start)).unwrap(),
            "Since 2023-01-10 00:00:00 UTC"
        );
        assert_eq!(
            build_title(&DateRange::all().until(end)).unwrap(),
            "Until 2023-01-11 23:59:59 UTC"
        );
        assert_eq!(
            build_title(&DateRange::between(start, end)).unwrap(),
            "From 2023-01-10 00:00:00 UTC to 2023-01-11 23:59:59 UTC"
        );
    }

    #[test]
    fn test_table_serializes() {
        let qs = queryset(Aggregation::ByCode, vec![("500", 1)]);
        let json = serde_json::to_value(CodeTable::from_queryset(&qs)).unwrap();
        assert!(json.get("title").is_none());
        assert_eq!(json["headers"][0], "Code");
        assert_eq!(json["rows"][0]["label"], "500");
        assert_eq!(json["rows"][0]["style"], "server_error");
    }
}
