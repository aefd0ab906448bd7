//! Safe accessors for the nested fields of a [`Record`].
//!
//! Each accessor returns [`Extracted`] instead of panicking or guessing; the
//! aggregation layer decides how `Missing` is attributed (normally to
//! [`SENTINEL`]).

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::date::{filing_month, YearMonth};
use crate::record::{EncodedCell, Record};

/// Category for missing or undecodable values.
pub const SENTINEL: &str = "Indefinido";

/// Outcome of a field lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracted<T> {
    Found(T),
    Missing,
}

impl<T> Extracted<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Extracted::Found(v),
            None => Extracted::Missing,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Extracted::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Extracted::Found(v) => Some(v),
            Extracted::Missing => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Extracted<U> {
        match self {
            Extracted::Found(v) => Extracted::Found(f(v)),
            Extracted::Missing => Extracted::Missing,
        }
    }
}

impl<T: AsRef<str>> Extracted<T> {
    /// Owned category key, with `Missing` mapped to the sentinel.
    pub fn into_category(self) -> String {
        match self {
            Extracted::Found(v) => v.as_ref().to_string(),
            Extracted::Missing => SENTINEL.to_string(),
        }
    }
}

/// Direct (non-encoded) field paths of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPath {
    Id,
    NumeroProcesso,
    DataAjuizamento,
    Grau,
    ClasseNome,
    OrgaoNome,
    OrgaoCodigo,
}

impl FieldPath {
    /// Dotted source path, e.g. `orgaoJulgador.codigo`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldPath::Id => "id",
            FieldPath::NumeroProcesso => "numeroProcesso",
            FieldPath::DataAjuizamento => "dataAjuizamento",
            FieldPath::Grau => "grau",
            FieldPath::ClasseNome => "classe.nome",
            FieldPath::OrgaoNome => "orgaoJulgador.nome",
            FieldPath::OrgaoCodigo => "orgaoJulgador.codigo",
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn non_empty(value: Option<&String>) -> Extracted<&str> {
    Extracted::from_option(
        value
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty()),
    )
}

/// Look up a direct field. Empty and whitespace-only values are `Missing`.
pub fn extract(record: &Record, path: FieldPath) -> Extracted<&str> {
    match path {
        FieldPath::Id => non_empty(record.id.as_ref()),
        FieldPath::NumeroProcesso => non_empty(record.numero_processo.as_ref()),
        FieldPath::DataAjuizamento => non_empty(record.data_ajuizamento.as_ref()),
        FieldPath::Grau => non_empty(record.grau.as_ref()),
        FieldPath::ClasseNome => non_empty(record.classe.as_ref().and_then(|c| c.nome.as_ref())),
        FieldPath::OrgaoNome => {
            non_empty(record.orgao_julgador.as_ref().and_then(|o| o.nome.as_ref()))
        }
        FieldPath::OrgaoCodigo => {
            non_empty(record.orgao_julgador.as_ref().and_then(|o| o.codigo.as_ref()))
        }
    }
}

/// Category key of a direct field, sentinel when missing.
pub fn category(record: &Record, path: FieldPath) -> String {
    extract(record, path).into_category()
}

/// Subject name held by one encoded cell.
///
/// A cell that fails to decode, is not an object, or has no usable `nome` is
/// `Missing`.
pub fn extract_assunto(cell: &EncodedCell) -> Extracted<String> {
    match cell.decode() {
        Ok(assunto) => Extracted::from_option(assunto.nome.filter(|s| !s.trim().is_empty())),
        Err(e) => {
            trace!(error = %e, raw = cell.raw(), "undecodable assunto cell");
            Extracted::Missing
        }
    }
}

/// One category per `assuntos` cell, in order, with failures mapped to the
/// sentinel. A record without subjects yields nothing.
pub fn assunto_categories(record: &Record) -> impl Iterator<Item = String> + '_ {
    record
        .assuntos
        .iter()
        .map(|cell| extract_assunto(cell).into_category())
}

/// Filing month of a record. Missing or unparsable dates are `Missing`.
pub fn extract_filing_month(record: &Record) -> Extracted<YearMonth> {
    match extract(record, FieldPath::DataAjuizamento) {
        Extracted::Found(raw) => Extracted::from_option(filing_month(raw)),
        Extracted::Missing => Extracted::Missing,
    }
}
