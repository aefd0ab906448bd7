use std::hash::Hash;

use serde::Serialize;

use super::table::FrequencyTable;

/// One entry of a top-N selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked<K> {
    pub key: K,
    pub value: f64,
}

impl<K> Ranked<K> {
    pub fn new(key: K, value: f64) -> Self {
        Self { key, value }
    }
}

/// The `n` largest entries, descending by value.
///
/// Ties keep the order in which the keys were first inserted into the table
/// (stable sort), so the result is reproducible for an unchanged table.
/// `n == 0` selects nothing; `n` larger than the table returns it all.
pub fn top_n<K: Hash + Eq + Clone>(table: &FrequencyTable<K>, n: usize) -> Vec<Ranked<K>> {
    if n == 0 {
        return Vec::new();
    }
    let mut ranked = sorted(table);
    ranked.truncate(n);
    ranked
}

/// Whole table, descending by value with insertion-order ties.
pub fn sorted<K: Hash + Eq + Clone>(table: &FrequencyTable<K>) -> Vec<Ranked<K>> {
    let mut ranked: Vec<Ranked<K>> = table
        .iter()
        .map(|(k, v)| Ranked::new(k.clone(), v))
        .collect();
    // `sort_by` is stable.
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    ranked
}

/// Whole table in first-insertion order, unsorted.
pub fn in_insertion_order<K: Hash + Eq + Clone>(table: &FrequencyTable<K>) -> Vec<Ranked<K>> {
    table.iter().map(|(k, v)| Ranked::new(k.clone(), v)).collect()
}

/// Limit taken from signed input: zero or negative selects nothing.
pub fn clamp_limit(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Keys of a selection, in order.
pub fn keys_of<K: Clone>(selection: &[Ranked<K>]) -> Vec<K> {
    selection.iter().map(|r| r.key.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, f64)]) -> FrequencyTable<String> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn ties_follow_insertion_order() {
        let t = table(&[("A", 5.0), ("B", 5.0), ("C", 1.0)]);
        assert_eq!(
            top_n(&t, 2),
            vec![Ranked::new("A".to_string(), 5.0), Ranked::new("B".to_string(), 5.0)]
        );

        let t = table(&[("C", 1.0), ("B", 5.0), ("A", 5.0)]);
        assert_eq!(keys_of(&top_n(&t, 2)), vec!["B", "A"]);
    }

    #[test]
    fn rerun_is_identical() {
        let t = table(&[("x", 2.0), ("y", 3.0), ("z", 2.0), ("w", 3.0)]);
        assert_eq!(top_n(&t, 3), top_n(&t, 3));
        assert_eq!(keys_of(&top_n(&t, 4)), vec!["y", "w", "x", "z"]);
    }

    #[test]
    fn bounds() {
        let t = table(&[("A", 1.0), ("B", 2.0)]);
        assert!(top_n(&t, 0).is_empty());
        assert_eq!(top_n(&t, 10).len(), 2);
        assert!(top_n(&FrequencyTable::<String>::new(), 3).is_empty());
    }

    #[test]
    fn signed_limits_clamp() {
        assert_eq!(clamp_limit(-3), 0);
        assert_eq!(clamp_limit(0), 0);
        assert_eq!(clamp_limit(15), 15);
    }

    #[test]
    fn insertion_order_is_untouched() {
        let t = table(&[("B", 1.0), ("A", 9.0)]);
        assert_eq!(keys_of(&in_insertion_order(&t)), vec!["B", "A"]);
    }
}
