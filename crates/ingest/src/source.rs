use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::IngestError;

/// One result row: column name to value.
pub type Row = Map<String, Value>;

/// Anything that answers SQL with rows.
pub trait TabularSource {
    fn query(&self, sql: &str) -> Result<Vec<Row>, IngestError>;
}

/// In-memory table store fed from JSON buffers.
///
/// Mirrors the register-buffer / create-table / select-all sequence of an
/// embedded analytical database, for the one query shape the pipeline needs:
/// `SELECT * FROM <table> [LIMIT n]`. Identifiers are case-insensitive.
#[derive(Debug, Default)]
pub struct JsonTableSource {
    buffers: HashMap<String, Vec<u8>>,
    tables: HashMap<String, Vec<Row>>,
}

impl JsonTableSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register raw JSON bytes under `name`.
    pub fn register_buffer(&mut self, name: &str, bytes: Vec<u8>) {
        debug!(buffer = name, bytes = bytes.len(), "registered buffer");
        self.buffers.insert(name.to_lowercase(), bytes);
    }

    /// Materialize `table` from a registered buffer holding a JSON array.
    ///
    /// Array elements that are not objects become empty rows so the row count
    /// always matches the element count. Returns the number of rows.
    pub fn create_table_from(&mut self, table: &str, buffer: &str) -> Result<usize, IngestError> {
        let bytes = self
            .buffers
            .get(&buffer.to_lowercase())
            .ok_or_else(|| IngestError::UnknownBuffer(buffer.to_string()))?;

        let items = match serde_json::from_slice::<Value>(bytes)? {
            Value::Array(items) => items,
            _ => return Err(IngestError::NotAnArray(buffer.to_string())),
        };

        let rows: Vec<Row> = items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::Object(row) => row,
                _ => {
                    warn!(table, row = idx, "non-object element loaded as empty row");
                    Row::new()
                }
            })
            .collect();

        let count = rows.len();
        self.tables.insert(table.to_lowercase(), rows);
        info!(table, rows = count, "table created");
        Ok(count)
    }

    pub fn table_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl TabularSource for JsonTableSource {
    fn query(&self, sql: &str) -> Result<Vec<Row>, IngestError> {
        let select = parse_select_all(sql)?;
        let rows = self
            .tables
            .get(&select.table)
            .ok_or_else(|| IngestError::UnknownTable(select.table.clone()))?;

        let take = select.limit.unwrap_or(rows.len());
        debug!(table = %select.table, rows = take.min(rows.len()), "query answered");
        Ok(rows.iter().take(take).cloned().collect())
    }
}

#[derive(Debug, PartialEq)]
struct SelectAll {
    table: String,
    limit: Option<usize>,
}

fn parse_select_all(sql: &str) -> Result<SelectAll, IngestError> {
    let unsupported = || IngestError::UnsupportedQuery(sql.trim().to_string());

    let statement = sql.trim().trim_end_matches(';');
    let tokens: Vec<&str> = statement.split_whitespace().collect();

    match tokens.as_slice() {
        [select, "*", from, table, rest @ ..]
            if select.eq_ignore_ascii_case("select") && from.eq_ignore_ascii_case("from") =>
        {
            let limit = match rest {
                [] => None,
                [kw, n] if kw.eq_ignore_ascii_case("limit") => {
                    Some(n.parse::<usize>().map_err(|_| unsupported())?)
                }
                _ => return Err(unsupported()),
            };
            Ok(SelectAll { table: table.to_lowercase(), limit })
        }
        _ => Err(unsupported()),
    }
}
