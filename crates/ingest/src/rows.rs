use serde_json::Value;
use tracing::debug;

use juris_core::{Record, RecordStore};

use crate::source::Row;

/// Largest integer a double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Replace integers outside ±(2^53 - 1) with their decimal string, at any
/// depth, so they survive consumers that hold numbers as doubles.
///
/// Only integers that parsed as `i64`/`u64` are exact. Beyond that range
/// `serde_json` has already read the literal as an `f64`, so its precision is
/// lost before this runs; such values are left as numbers.
pub fn normalize_big_integers(value: Value) -> Value {
    match value {
        Value::Number(n) => {
            let big = match (n.as_i64(), n.as_u64()) {
                (_, Some(u)) => u > MAX_SAFE_INTEGER,
                (Some(i), None) => i.unsigned_abs() > MAX_SAFE_INTEGER,
                (None, None) => false,
            };
            if big {
                Value::String(n.to_string())
            } else {
                Value::Number(n)
            }
        }
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_big_integers).collect()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, normalize_big_integers(v)))
                .collect(),
        ),
        other => other,
    }
}

/// Turn query rows into records. Every row becomes a record.
pub fn rows_to_store(rows: Vec<Row>) -> RecordStore {
    let count = rows.len();
    let store: RecordStore = rows
        .into_iter()
        .map(|row| Record::from_value(normalize_big_integers(Value::Object(row))))
        .collect();
    debug!(rows = count, "rows converted to records");
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn big_integers_become_strings() {
        let value = json!({
            "small": 42,
            "neg": -7,
            "float": 1.5,
            "big": 9_007_199_254_740_993u64,
            "nested": [{ "codigo": -9_007_199_254_740_995i64 }]
        });

        let normalized = normalize_big_integers(value);
        assert_eq!(normalized["small"], json!(42));
        assert_eq!(normalized["neg"], json!(-7));
        assert_eq!(normalized["float"], json!(1.5));
        assert_eq!(normalized["big"], json!("9007199254740993"));
        assert_eq!(normalized["nested"][0]["codigo"], json!("-9007199254740995"));
    }

    #[test]
    fn integers_beyond_u64_stay_floats() {
        let value: Value = serde_json::from_str("[123456789012345678901234]").unwrap();
        let normalized = normalize_big_integers(value);
        assert!(normalized[0].is_f64());
    }

    #[test]
    fn every_row_becomes_a_record() {
        let rows = vec![
            json!({ "numeroProcesso": "1", "orgaoJulgador": { "codigo": 12_345_678_901_234_567u64 } }),
            json!({}),
        ]
        .into_iter()
        .map(|v| match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        })
        .collect();

        let store = rows_to_store(rows);
        assert_eq!(store.len(), 2);
        let codigo = store.records()[0]
            .orgao_julgador
            .as_ref()
            .and_then(|o| o.codigo.as_deref());
        assert_eq!(codigo, Some("12345678901234567"));
    }
}
