//! Query set: processed data ready for table rendering.
//!
//! A QuerySet sits between a raw [`ScanResult`] and the final table output.
//! It represents data that has been:
//! - Grouped to the requested level (code, class, file)
//! - Sorted according to the ordering preference
//!
//! The data pipeline is:
//! 1. Raw Data (ScanResult)
//! 2. QuerySet (grouped, sorted)
//! 3. CodeTable (formatted strings for display)

use std::cmp::Ordering as CmpOrdering;

use serde::Serialize;

use crate::data::counts::ScanStats;
use crate::data::range::DateRange;
use crate::data::scanner::ScanResult;

use super::class::StatusClass;
use super::options::{Aggregation, OrderBy, OrderDirection, Ordering};

/// A single item in a query set (one row of data before string formatting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryItem {
    /// Row label (status code, class label or file path)
    pub label: String,
    /// Accepted lines in this row
    pub count: u64,
    /// Status class, for code and class rows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<StatusClass>,
}

/// Query set for scan results.
#[derive(Debug, Clone, Serialize)]
pub struct CodeQuerySet {
    /// Aggregation level used
    pub aggregation: Aggregation,
    /// Time window the counts were taken over
    pub range: DateRange,
    /// Data rows (grouped and sorted)
    pub items: Vec<QueryItem>,
    /// Sum of all counted lines
    pub total: u64,
    /// Line accounting across all inputs
    pub stats: ScanStats,
    /// Number of files scanned
    pub file_count: usize,
}

impl CodeQuerySet {
    /// Create a QuerySet from a ScanResult.
    ///
    /// `ByFile` needs per-file reports in the result; without them it yields
    /// no rows, only the total.
    pub fn from_result(result: &ScanResult, aggregation: Aggregation, ordering: Ordering) -> Self {
        let mut items = match aggregation {
            Aggregation::ByCode => code_items(result),
            Aggregation::ByClass => class_items(result),
            Aggregation::ByFile => file_items(result),
        };
        sort_items(&mut items, &ordering);

        CodeQuerySet {
            aggregation,
            range: result.range,
            items,
            total: result.total.counts.total(),
            stats: result.total.stats,
            file_count: result.file_count,
        }
    }
}

fn code_items(result: &ScanResult) -> Vec<QueryItem> {
    result
        .total
        .counts
        .iter()
        .map(|(code, count)| QueryItem {
            label: code.to_string(),
            count,
            class: Some(StatusClass::of(code)),
        })
        .collect()
}

/// Class rows in the order their first code appeared; empty classes are dropped.
fn class_items(result: &ScanResult) -> Vec<QueryItem> {
    let mut items: Vec<QueryItem> = Vec::new();

    for (code, count) in result.total.counts.iter() {
        let class = StatusClass::of(code);
        match items.iter_mut().find(|item| item.class == Some(class)) {
            Some(item) => item.count += count,
            None => items.push(QueryItem {
                label: class.label().to_string(),
                count,
                class: Some(class),
            }),
        }
    }

    items
}

fn file_items(result: &ScanResult) -> Vec<QueryItem> {
    result
        .files
        .iter()
        .map(|file| QueryItem {
            label: file.path.to_string_lossy().to_string(),
            count: file.report.counts.total(),
            class: None,
        })
        .collect()
}

/// Stable sort, so equal keys keep their first-seen order in both directions.
fn sort_items(items: &mut [QueryItem], ordering: &Ordering) {
    let descending = ordering.direction == OrderDirection::Descending;

    match ordering.by {
        OrderBy::FirstSeen => {
            if descending {
                items.reverse();
            }
        }
        OrderBy::Label => items.sort_by(|a, b| directed(a.label.cmp(&b.label), descending)),
        OrderBy::Count => items.sort_by(|a, b| directed(a.count.cmp(&b.count), descending)),
    }
}

fn directed(ord: CmpOrdering, descending: bool) -> CmpOrdering {
    if descending {
        ord.reverse()
    } else {
        ord
    }
}
