use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};

/// Calendar month used to bucket filing dates. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a filing date into its calendar date.
///
/// Tries, in order:
/// 1. RFC3339: `"2020-03-10T00:00:00.000Z"`
/// 2. ISO without offset: `"2020-03-10T14:00:00"`, `"2020-03-10T00:00:00.000"`
/// 3. Space-separated: `"2020-03-10 14:00:00"`
/// 4. Just date: `"2020-03-10"`
/// 5. Compact DataJud form: `"20200310000000"`
pub fn parse_filing_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ndt.date());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(ndt.date());
    }
    if let Ok(nd) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(nd);
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(value, "%Y%m%d%H%M%S") {
        return Some(ndt.date());
    }

    None
}

/// Month bucket of a filing date string, if it parses.
pub fn filing_month(value: &str) -> Option<YearMonth> {
    parse_filing_date(value).map(|d| YearMonth::new(d.year(), d.month()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_formats() {
        let expected = Some(YearMonth::new(2020, 3));
        assert_eq!(filing_month("2020-03-10T00:00:00.000Z"), expected);
        assert_eq!(filing_month("2020-03-10T21:30:00-03:00"), expected);
        assert_eq!(filing_month("2020-03-10T14:00:00"), expected);
        assert_eq!(filing_month("2020-03-10T00:00:00.000"), expected);
        assert_eq!(filing_month("2020-03-10 14:00:00"), expected);
        assert_eq!(filing_month("2020-03-10"), expected);
        assert_eq!(filing_month("20200310000000"), expected);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(filing_month(""), None);
        assert_eq!(filing_month("ontem"), None);
        assert_eq!(filing_month("2020-13-01"), None);
    }

    #[test]
    fn display_and_order() {
        let a = YearMonth::new(2019, 12);
        let b = YearMonth::new(2020, 1);
        assert!(a < b);
        assert_eq!(a.to_string(), "2019-12");
        assert_eq!(serde_json::to_string(&b).unwrap(), "\"2020-01\"");
    }
}
