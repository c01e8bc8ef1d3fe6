//! Inclusive time windows over extracted timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LogcodesError;
use crate::Result;

/// An inclusive time window, open-ended on either side.
///
/// Each bound is independently optional: `start` alone accepts everything
/// from that instant on, `end` alone everything up to it, and no bounds at
/// all accepts every timestamp ("show all").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest accepted instant (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    /// Latest accepted instant (inclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// A range with no bounds, accepting every timestamp.
    pub fn all() -> Self {
        Self::default()
    }

    /// A range bounded on both sides.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Builder: set the inclusive start bound.
    pub fn since(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Builder: set the inclusive end bound.
    pub fn until(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    /// Whether neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `timestamp` falls inside the window, bounds included.
    ///
    /// A window whose start lies after its end contains nothing.
    pub fn contains(&self, timestamp: &DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| *timestamp >= start)
            && self.end.is_none_or(|end| *timestamp <= end)
    }

    /// Parse a bound given on the command line or in configuration.
    ///
    /// Accepted forms:
    /// - RFC 3339 with any offset (`2023-01-10T12:00:00Z`, `...+02:00`)
    /// - naive date-time taken as UTC (`2023-01-10T12:00:00`, `2023-01-10 12:00:00`)
    /// - bare date (`2023-01-10`): midnight for a start bound, the last second
    ///   of the day for an end bound
    pub fn parse_bound(input: &str, side: Bound) -> Result<DateTime<Utc>> {
        let input = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(dt.with_timezone(&Utc));
        }

        for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Utc.from_utc_datetime(&naive));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
            let time = match side {
                Bound::Start => NaiveTime::MIN,
                Bound::End => NaiveTime::from_hms_opt(23, 59, 59)
                    .ok_or_else(|| LogcodesError::InvalidTimestamp(input.to_string()))?,
            };
            return Ok(Utc.from_utc_datetime(&date.and_time(time)));
        }

        Err(LogcodesError::InvalidTimestamp(input.to_string()))
    }
}

/// Which side of a [`DateRange`] a parsed bound is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_unbounded_accepts_everything() {
        let range = DateRange::all();
        assert!(range.is_unbounded());
        assert!(range.contains(&at("1970-01-01T00:00:00Z")));
        assert!(range.contains(&at("2999-12-31T23:59:59Z")));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let start = at("2023-01-10T12:00:00Z");
        let end = at("2023-01-10T13:00:00Z");
        let range = DateRange::between(start, end);

        assert!(range.contains(&start));
        assert!(range.contains(&end));
        assert!(range.contains(&at("2023-01-10T12:30:00Z")));
        assert!(!range.contains(&at("2023-01-10T11:59:59Z")));
        assert!(!range.contains(&at("2023-01-10T13:00:01Z")));
    }

    #[test]
    fn test_start_only() {
        let range = DateRange::all().since(at("2023-01-10T12:00:01Z"));
        assert!(!range.contains(&at("2023-01-10T12:00:00Z")));
        assert!(range.contains(&at("2023-01-10T12:00:01Z")));
        assert!(range.contains(&at("2030-01-01T00:00:00Z")));
    }

    #[test]
    fn test_end_only() {
        let range = DateRange::all().until(at("2023-01-10T12:00:00Z"));
        assert!(range.contains(&at("2000-01-01T00:00:00Z")));
        assert!(range.contains(&at("2023-01-10T12:00:00Z")));
        assert!(!range.contains(&at("2023-01-10T12:00:01Z")));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = DateRange::between(at("2023-01-11T00:00:00Z"), at("2023-01-10T00:00:00Z"));
        assert!(!range.contains(&at("2023-01-10T12:00:00Z")));
        assert!(!range.contains(&at("2023-01-11T00:00:00Z")));
    }

    #[test]
    fn test_comparison_is_on_instants() {
        // 14:00 at +02:00 is 12:00 UTC
        let range = DateRange::all().until(at("2023-01-10T14:00:00+02:00"));
        assert!(range.contains(&at("2023-01-10T12:00:00Z")));
        assert!(!range.contains(&at("2023-01-10T12:00:01Z")));
    }

    #[test]
    fn test_parse_bound_forms() {
        let expected = at("2023-01-10T12:00:00Z");
        for input in [
            "2023-01-10T12:00:00Z",
            "2023-01-10T14:00:00+02:00",
            "2023-01-10T12:00:00",
            "2023-01-10 12:00:00",
            "  2023-01-10 12:00:00 ",
        ] {
            assert_eq!(
                DateRange::parse_bound(input, Bound::Start).unwrap(),
                expected,
                "{input}"
            );
        }
    }

    #[test]
    fn test_parse_bound_bare_date() {
        assert_eq!(
            DateRange::parse_bound("2023-01-10", Bound::Start).unwrap(),
            at("2023-01-10T00:00:00Z")
        );
        assert_eq!(
            DateRange::parse_bound("2023-01-10", Bound::End).unwrap(),
            at("2023-01-10T23:59:59Z")
        );
    }

    #[test]
    fn test_parse_bound_invalid() {
        for input in ["", "yesterday", "2023-13-01", "10/Jan/2023:12:00:00"] {
            let err = DateRange::parse_bound(input, Bound::End).unwrap_err();
            assert!(matches!(err, LogcodesError::InvalidTimestamp(_)), "{input}");
        }
    }
}
