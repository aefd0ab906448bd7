use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize};

use juris_core::{assunto_categories, category, extract_assunto, EncodedCell, FieldPath, Record};

/// Categorical axis a chart can be aggregated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Classe,
    /// Fans out: one key per `assuntos` cell.
    Assunto,
    OrgaoNome,
    OrgaoCodigo,
    Grau,
}

impl Dimension {
    /// Direct field behind a single-valued dimension.
    pub fn field(&self) -> Option<FieldPath> {
        match self {
            Dimension::Classe => Some(FieldPath::ClasseNome),
            Dimension::OrgaoNome => Some(FieldPath::OrgaoNome),
            Dimension::OrgaoCodigo => Some(FieldPath::OrgaoCodigo),
            Dimension::Grau => Some(FieldPath::Grau),
            Dimension::Assunto => None,
        }
    }

    pub fn fans_out(&self) -> bool {
        matches!(self, Dimension::Assunto)
    }

    /// Category keys a record contributes on this dimension.
    pub fn keys<'a>(&self, record: &'a Record) -> DimensionKeys<'a> {
        match self.field() {
            Some(path) => DimensionKeys::Single(Some(category(record, path))),
            None => DimensionKeys::Cells(record.assuntos.iter()),
        }
    }

    /// Whether `record` has `key` on this dimension.
    pub fn matches(&self, record: &Record, key: &str) -> bool {
        match self.field() {
            Some(path) => category(record, path) == key,
            None => assunto_categories(record).any(|k| k == key),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Classe => write!(f, "classe"),
            Dimension::Assunto => write!(f, "assunto"),
            Dimension::OrgaoNome => write!(f, "orgao_nome"),
            Dimension::OrgaoCodigo => write!(f, "orgao_codigo"),
            Dimension::Grau => write!(f, "grau"),
        }
    }
}

/// Iterator over the keys of one record on one dimension.
pub enum DimensionKeys<'a> {
    Single(Option<String>),
    Cells(slice::Iter<'a, EncodedCell>),
}

impl Iterator for DimensionKeys<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            DimensionKeys::Single(key) => key.take(),
            DimensionKeys::Cells(cells) => cells.next().map(|c| extract_assunto(c).into_category()),
        }
    }
}
