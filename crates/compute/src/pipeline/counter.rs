use std::hash::Hash;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use juris_core::Record;

use super::table::FrequencyTable;

/// How much a record (or record/element pair) adds to its key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Every contribution counts 1.
    #[default]
    Occurrences,
    /// Every contribution counts the record's number of movements.
    Movements,
}

impl Weighting {
    pub fn weight(&self, record: &Record) -> f64 {
        match self {
            Weighting::Occurrences => 1.0,
            Weighting::Movements => record.movement_count() as f64,
        }
    }
}

/// Single-key frequency count.
///
/// `key_fn` returns zero or more keys per record; a record whose field is a
/// sequence contributes once per element, each time with the record's own
/// weight. Return `Some(key)` or `std::iter::once(key)` for plain fields.
pub fn count_by<R, K, I, F, W>(records: impl IntoIterator<Item = R>, key_fn: F, weight_fn: W) -> FrequencyTable<K>
where
    R: Copy,
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
    F: Fn(R) -> I,
    W: Fn(R) -> f64,
{
    let start = Instant::now();
    let mut table = FrequencyTable::new();
    let mut scanned = 0usize;
    let mut contributions = 0usize;

    for record in records {
        scanned += 1;
        let weight = weight_fn(record);
        for key in key_fn(record) {
            table.add(key, weight);
            contributions += 1;
        }
    }

    debug!(
        records = scanned,
        contributions,
        keys = table.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "count_by complete"
    );
    table
}
