use std::path::Path;
use std::time::Instant;

use tracing::info;

use juris_core::config::DataConfig;
use juris_core::RecordStore;

use crate::envelope::parse_envelope;
use crate::error::IngestError;
use crate::rows::rows_to_store;
use crate::source::{JsonTableSource, TabularSource};

/// Load a search-result envelope from disk into a record store.
pub fn load_store(path: &Path, table: &str, buffer: &str) -> Result<RecordStore, IngestError> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = bytes.len(), "read dataset");
    load_store_from_bytes(&bytes, table, buffer)
}

/// Load using the data section of the environment config.
pub fn load_from_config(config: &DataConfig) -> Result<RecordStore, IngestError> {
    load_store(&config.path, &config.table, &config.source_buffer)
}

/// Envelope bytes → `_source` payloads → table `table` → `SELECT *` → records.
pub fn load_store_from_bytes(bytes: &[u8], table: &str, buffer: &str) -> Result<RecordStore, IngestError> {
    let start = Instant::now();

    let sources = parse_envelope(bytes)?;
    let payload = serde_json::to_vec(&sources)?;

    let mut source = JsonTableSource::new();
    source.register_buffer(buffer, payload);
    source.create_table_from(table, buffer)?;

    let rows = source.query(&format!("SELECT * FROM {table}"))?;
    let store = rows_to_store(rows);

    info!(
        records = store.len(),
        table,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "record store loaded"
    );
    Ok(store)
}
