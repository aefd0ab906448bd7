use std::hash::Hash;

use indexmap::IndexMap;
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

/// Category key (or key pair) to accumulated value.
///
/// Remembers the order in which keys were first seen; top-N selection uses
/// that order to break ties.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable<K: Hash + Eq> {
    entries: IndexMap<K, f64>,
}

impl<K: Hash + Eq> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self { entries: IndexMap::new() }
    }
}

impl<K: Hash + Eq> FrequencyTable<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to `key`. A zero weight still registers the key.
    pub(crate) fn add(&mut self, key: K, weight: f64) {
        *self.entries.entry(key).or_insert(0.0) += weight;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Value for `key`, 0 when never observed.
    pub fn value(&self, key: &K) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, f64)> + '_ {
        self.entries.iter().map(|(k, v)| (k, *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.keys()
    }

    /// Sum of all accumulated values.
    pub fn total(&self) -> f64 {
        self.entries.values().sum()
    }
}

impl<K: Hash + Eq> FromIterator<(K, f64)> for FrequencyTable<K> {
    /// Accumulates repeated keys, keeping the position of the first one.
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, weight) in iter {
            table.add(key, weight);
        }
        table
    }
}

#[derive(Serialize)]
struct EntryRef<'a, K> {
    key: &'a K,
    value: f64,
}

/// Serialized as a list of `{ "key": .., "value": .. }` so pair keys survive
/// formats that only allow string map keys.
impl<K: Hash + Eq + Serialize> Serialize for FrequencyTable<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            seq.serialize_element(&EntryRef { key, value: *value })?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_and_keeps_first_position() {
        let table: FrequencyTable<&str> =
            [("B", 1.0), ("A", 2.0), ("B", 3.0), ("C", 0.0)].into_iter().collect();

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![(&"B", 4.0), (&"A", 2.0), (&"C", 0.0)]);
        assert_eq!(table.total(), 6.0);
        assert!(table.contains(&"C"));
        assert_eq!(table.value(&"Z"), 0.0);
        assert_eq!(table.get(&"Z"), None);
    }

    #[test]
    fn serializes_as_entry_list() {
        let table: FrequencyTable<(String, String)> =
            [(("A".to_string(), "X".to_string()), 4.0)].into_iter().collect();

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!([{ "key": ["A", "X"], "value": 4.0 }]));
    }
}
