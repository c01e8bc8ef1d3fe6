//! Options controlling how scan results are grouped and ordered.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Grouping level for result rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Aggregation {
    /// One row per status code
    #[default]
    ByCode,
    /// One row per status class (2xx, 3xx, 4xx, 5xx, other)
    ByClass,
    /// One row per scanned file, with its accepted line count
    ByFile,
}

/// Field to order results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderBy {
    /// Order in which rows were first encountered
    #[default]
    FirstSeen,
    /// Order by label (status code, class or path), lexicographically
    Label,
    /// Order by count
    Count,
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "seen" | "first-seen" => Ok(OrderBy::FirstSeen),
            "label" | "code" | "name" | "path" => Ok(OrderBy::Label),
            "count" => Ok(OrderBy::Count),
            _ => Err(format!("Unknown order field: {}", s)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Ascending (A-Z, smallest first)
    #[default]
    Ascending,
    /// Descending (Z-A, largest first)
    Descending,
}

/// Ordering configuration for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ordering {
    /// Field to order by
    pub by: OrderBy,
    /// Sort direction
    pub direction: OrderDirection,
}

impl Ordering {
    /// Order of first appearance (default)
    pub fn by_first_seen() -> Self {
        Self::default()
    }

    /// Order by label ascending
    pub fn by_label() -> Self {
        Self {
            by: OrderBy::Label,
            direction: OrderDirection::Ascending,
        }
    }

    /// Order by count, largest first
    pub fn by_count() -> Self {
        Self {
            by: OrderBy::Count,
            direction: OrderDirection::Descending,
        }
    }

    /// Set sort direction to ascending
    pub fn ascending(mut self) -> Self {
        self.direction = OrderDirection::Ascending;
        self
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.direction = OrderDirection::Descending;
        self
    }
}
