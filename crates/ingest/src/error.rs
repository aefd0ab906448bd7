use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("search envelope has no hits.hits array")]
    Envelope,

    #[error("unknown buffer: {0}")]
    UnknownBuffer(String),

    #[error("buffer '{0}' is not a JSON array")]
    NotAnArray(String),

    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error("unsupported query: {0}")]
    UnsupportedQuery(String),
}
