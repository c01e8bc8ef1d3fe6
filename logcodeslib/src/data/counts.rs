//! Core data structures for status code statistics.
//!
//! - [`StatusCodeCounts`]: code → occurrence count, in order of first appearance
//! - [`ScanStats`]: how many lines a scan examined, counted and skipped
//! - [`ScanReport`]: both of the above for one scanned input
//!
//! Everything here adds up: counts and stats from independent scans can be
//! merged with `+=`, and merging in any order yields the same totals.

use std::collections::HashMap;
use std::ops::{Add, AddAssign};

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Occurrence counts per HTTP status code.
///
/// Keys are the status code strings exactly as captured from the log, so
/// "200" and "0200" are distinct. Iteration follows the order in which codes
/// were first seen, which keeps output deterministic for a given input.
/// A code is present only if its count is at least one.
///
/// Equality compares the mapping only, not iteration order.
#[derive(Debug, Clone, Default)]
pub struct StatusCodeCounts {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl StatusCodeCounts {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `code`.
    pub fn increment(&mut self, code: &str) {
        self.add_count(code, 1);
    }

    fn add_count(&mut self, code: &str, count: u64) {
        if count == 0 {
            return;
        }
        match self.index.get(code) {
            Some(&i) => self.entries[i].1 += count,
            None => {
                self.index.insert(code.to_string(), self.entries.len());
                self.entries.push((code.to_string(), count));
            }
        }
    }

    /// Add every count of `other` into `self`.
    ///
    /// Codes new to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: &StatusCodeCounts) {
        for (code, count) in other.iter() {
            self.add_count(code, count);
        }
    }

    /// Count for `code`, zero when never seen.
    pub fn get(&self, code: &str) -> u64 {
        self.index.get(code).map_or(0, |&i| self.entries[i].1)
    }

    /// Whether `code` was seen at least once.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// `(code, count)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries
            .iter()
            .map(|(code, count)| (code.as_str(), *count))
    }
}

impl PartialEq for StatusCodeCounts {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(code, count)| other.get(code) == count)
    }
}

impl Eq for StatusCodeCounts {}

impl AddAssign<&StatusCodeCounts> for StatusCodeCounts {
    fn add_assign(&mut self, other: &StatusCodeCounts) {
        self.merge(other);
    }
}

impl<'a> FromIterator<&'a str> for StatusCodeCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = Self::new();
        for code in iter {
            counts.increment(code);
        }
        counts
    }
}

impl Serialize for StatusCodeCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (code, count) in self.iter() {
            map.serialize_entry(code, &count)?;
        }
        map.end()
    }
}

/// Line accounting for a scan.
///
/// Every examined line lands in exactly one bucket, so
/// `lines == unmatched + out_of_range + accepted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Lines examined
    pub lines: u64,
    /// Lines without a usable timestamp and status code
    pub unmatched: u64,
    /// Records whose timestamp fell outside the requested range
    pub out_of_range: u64,
    /// Records counted
    pub accepted: u64,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines that produced no count, for whatever reason.
    pub fn skipped(&self) -> u64 {
        self.unmatched + self.out_of_range
    }
}

impl Add for ScanStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            lines: self.lines + other.lines,
            unmatched: self.unmatched + other.unmatched,
            out_of_range: self.out_of_range + other.out_of_range,
            accepted: self.accepted + other.accepted,
        }
    }
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.unmatched += other.unmatched;
        self.out_of_range += other.out_of_range;
        self.accepted += other.accepted;
    }
}

/// Result of scanning one input: the counts and how they were arrived at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Status code counts for accepted lines
    pub counts: StatusCodeCounts,
    /// Line accounting
    pub stats: ScanStats,
}

impl ScanReport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AddAssign<&ScanReport> for ScanReport {
    fn add_assign(&mut self, other: &ScanReport) {
        self.counts += &other.counts;
        self.stats += other.stats;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_default() {
        let counts = StatusCodeCounts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.len(), 0);
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.get("200"), 0);
        assert!(!counts.contains("200"));
    }

    #[test]
    fn test_increment() {
        let mut counts = StatusCodeCounts::new();
        counts.increment("200");
        counts.increment("404");
        counts.increment("200");

        assert_eq!(counts.get("200"), 2);
        assert_eq!(counts.get("404"), 1);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_first_appearance_order() {
        let counts: StatusCodeCounts = ["404", "200", "404", "500", "200"].into_iter().collect();
        let order: Vec<_> = counts.iter().collect();
        assert_eq!(order, vec![("404", 2), ("200", 2), ("500", 1)]);
    }

    #[test]
    fn test_codes_are_not_normalized() {
        let counts: StatusCodeCounts = ["200", "0200"].into_iter().collect();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("200"), 1);
        assert_eq!(counts.get("0200"), 1);
    }

    #[test]
    fn test_merge() {
        let mut a: StatusCodeCounts = ["200", "404"].into_iter().collect();
        let b: StatusCodeCounts = ["500", "200", "200"].into_iter().collect();
        a += &b;

        let order: Vec<_> = a.iter().collect();
        assert_eq!(order, vec![("200", 3), ("404", 1), ("500", 1)]);
    }

    #[test]
    fn test_merge_is_commutative() {
        let a: StatusCodeCounts = ["200", "404"].into_iter().collect();
        let b: StatusCodeCounts = ["500", "200"].into_iter().collect();

        let mut ab = a.clone();
        ab.merge(&b);
        let mut ba = b.clone();
        ba.merge(&a);

        // Different iteration order, same mapping
        assert_ne!(ab.iter().collect::<Vec<_>>(), ba.iter().collect::<Vec<_>>());
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_merge_empty() {
        let mut a: StatusCodeCounts = ["200"].into_iter().collect();
        a.merge(&StatusCodeCounts::new());
        assert_eq!(a.len(), 1);
        assert_eq!(a.get("200"), 1);
    }

    #[test]
    fn test_serialize_preserves_order() {
        let counts: StatusCodeCounts = ["404", "200", "404"].into_iter().collect();
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"404":2,"200":1}"#);
    }

    #[test]
    fn test_scan_stats_add() {
        let a = ScanStats {
            lines: 10,
            unmatched: 2,
            out_of_range: 3,
            accepted: 5,
        };
        let b = ScanStats {
            lines: 4,
            unmatched: 1,
            out_of_range: 0,
            accepted: 3,
        };

        let sum = a + b;
        assert_eq!(sum.lines, 14);
        assert_eq!(sum.unmatched, 3);
        assert_eq!(sum.out_of_range, 3);
        assert_eq!(sum.accepted, 8);
        assert_eq!(sum.skipped(), 6);

        let mut acc = a;
        acc += b;
        assert_eq!(acc, sum);
    }

    #[test]
    fn test_scan_report_add_assign() {
        let mut report = ScanReport::new();
        let other = ScanReport {
            counts: ["200", "500"].into_iter().collect(),
            stats: ScanStats {
                lines: 3,
                unmatched: 1,
                out_of_range: 0,
                accepted: 2,
            },
        };

        report += &other;
        report += &other;

        assert_eq!(report.counts.get("200"), 2);
        assert_eq!(report.counts.get("500"), 2);
        assert_eq!(report.stats.lines, 6);
        assert_eq!(report.stats.accepted, 4);
    }
}
