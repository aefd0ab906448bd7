use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use juris_core::{extract_filing_month, Extracted, Record, YearMonth};

/// Filings for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCount {
    pub month: YearMonth,
    pub count: u64,
}

/// Monthly filing counts in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilingTimeline {
    pub months: Vec<MonthCount>,
    /// Records whose filing date is absent or unparsable.
    pub undated: u64,
}

impl FilingTimeline {
    pub fn dated(&self) -> u64 {
        self.months.iter().map(|m| m.count).sum()
    }
}

/// Count filings per `YYYY-MM`.
pub fn monthly_filings<'a>(records: impl IntoIterator<Item = &'a Record>) -> FilingTimeline {
    let mut buckets: BTreeMap<YearMonth, u64> = BTreeMap::new();
    let mut undated = 0u64;

    for record in records {
        match extract_filing_month(record) {
            Extracted::Found(month) => *buckets.entry(month).or_insert(0) += 1,
            Extracted::Missing => undated += 1,
        }
    }

    debug!(months = buckets.len(), undated, "monthly_filings complete");

    FilingTimeline {
        months: buckets
            .into_iter()
            .map(|(month, count)| MonthCount { month, count })
            .collect(),
        undated,
    }
}
