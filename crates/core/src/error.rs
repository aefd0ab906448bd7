use thiserror::Error;

/// Failure to decode one raw `assuntos` cell.
///
/// Never propagated past the extractor: callers map it to the sentinel.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
