use std::hash::Hash;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use super::table::FrequencyTable;

/// Joint table of `(primary, secondary)` pairs plus both marginals.
///
/// All three are filled in the same pass: summing `joint` over the secondary
/// key reproduces `marginal_primary`, and over the primary key reproduces
/// `marginal_secondary`.
#[derive(Debug, Clone, Serialize)]
pub struct JointTables<K1: Hash + Eq, K2: Hash + Eq> {
    pub joint: FrequencyTable<(K1, K2)>,
    pub marginal_primary: FrequencyTable<K1>,
    pub marginal_secondary: FrequencyTable<K2>,
}

impl<K1: Hash + Eq, K2: Hash + Eq> Default for JointTables<K1, K2> {
    fn default() -> Self {
        Self {
            joint: FrequencyTable::new(),
            marginal_primary: FrequencyTable::new(),
            marginal_secondary: FrequencyTable::new(),
        }
    }
}

/// Count co-occurrences of a primary key with each of a record's secondary
/// keys.
///
/// The secondary dimension may fan out (e.g. one key per subject). Every
/// record/element pair adds the record's weight to the joint cell and to both
/// marginals, so the primary marginal counts a record once per secondary
/// element. A record with no secondary keys contributes nothing.
pub fn count_pairs<R, K1, K2, I, P, S, W>(
    records: impl IntoIterator<Item = R>,
    primary_fn: P,
    secondary_fn: S,
    weight_fn: W,
) -> JointTables<K1, K2>
where
    R: Copy,
    K1: Hash + Eq + Clone,
    K2: Hash + Eq + Clone,
    I: IntoIterator<Item = K2>,
    P: Fn(R) -> K1,
    S: Fn(R) -> I,
    W: Fn(R) -> f64,
{
    let start = Instant::now();
    let mut tables = JointTables::default();
    let mut scanned = 0usize;
    let mut pairs = 0usize;

    for record in records {
        scanned += 1;
        let primary = primary_fn(record);
        let weight = weight_fn(record);

        for secondary in secondary_fn(record) {
            tables.joint.add((primary.clone(), secondary.clone()), weight);
            tables.marginal_primary.add(primary.clone(), weight);
            tables.marginal_secondary.add(secondary, weight);
            pairs += 1;
        }
    }

    debug!(
        records = scanned,
        pairs,
        cells = tables.joint.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "count_pairs complete"
    );
    tables
}
