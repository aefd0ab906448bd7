//! Loading judicial-process dumps into a [`juris_core::RecordStore`].
//!
//! Flow: search-result envelope → `_source` payloads → named table in a
//! [`TabularSource`] → `SELECT *` rows → records.

pub mod envelope;
pub mod error;
pub mod loader;
pub mod rows;
pub mod source;

pub use envelope::parse_envelope;
pub use error::IngestError;
pub use loader::{load_from_config, load_store, load_store_from_bytes};
pub use rows::{normalize_big_integers, rows_to_store};
pub use source::{JsonTableSource, Row, TabularSource};
