use serde_json::Value;
use tracing::{info, warn};

use crate::error::IngestError;

/// Extract the `_source` payload of every hit in a search-result envelope
/// (`{ "hits": { "hits": [ { "_source": {...} }, ... ] } }`).
///
/// Hits without a `_source` carry no process and are skipped.
pub fn parse_envelope(bytes: &[u8]) -> Result<Vec<Value>, IngestError> {
    let mut root: Value = serde_json::from_slice(bytes)?;

    let hits = root
        .get_mut("hits")
        .and_then(|h| h.get_mut("hits"))
        .and_then(Value::as_array_mut)
        .ok_or(IngestError::Envelope)?;

    let total = hits.len();
    let mut sources = Vec::with_capacity(total);
    for (idx, hit) in hits.iter_mut().enumerate() {
        match hit.get_mut("_source").map(Value::take) {
            Some(source) => sources.push(source),
            None => warn!(hit = idx, "search hit without _source, skipped"),
        }
    }

    info!(hits = total, sources = sources.len(), "parsed search envelope");
    Ok(sources)
}
