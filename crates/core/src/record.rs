use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::DecodeError;

/// One judicial process as it comes out of the tabular source.
///
/// Every field is optional. Deserialization is lenient: a field with an
/// unexpected JSON shape is treated as absent instead of failing the row, so a
/// malformed record still reaches the aggregations under the sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub numero_processo: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub data_ajuizamento: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub grau: Option<String>,
    #[serde(default, deserialize_with = "lenient_object", skip_serializing_if = "Option::is_none")]
    pub classe: Option<Classe>,
    #[serde(default, deserialize_with = "lenient_object", skip_serializing_if = "Option::is_none")]
    pub orgao_julgador: Option<OrgaoJulgador>,
    #[serde(default, deserialize_with = "encoded_cells")]
    pub assuntos: Vec<EncodedCell>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub movimentos: Vec<Value>,
}

impl Record {
    /// Build a record from an arbitrary JSON value.
    ///
    /// Non-object values yield an empty record rather than an error.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Number of movement entries, used as the per-record weight.
    pub fn movement_count(&self) -> usize {
        self.movimentos.len()
    }
}

/// Case class (`classe`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classe {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
}

/// Judging body (`orgaoJulgador`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrgaoJulgador {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
}

/// Decoded subject entry. Only a string `nome` names a subject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assunto {
    #[serde(default, deserialize_with = "string_only", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
}

/// A raw, still-encoded `assuntos` element.
///
/// The source stores each subject as a JSON string; decoding is an explicit
/// step so that a bad cell fails on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedCell(String);

impl EncodedCell {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Decode the cell into an [`Assunto`].
    pub fn decode(&self) -> Result<Assunto, DecodeError> {
        let value: Value = serde_json::from_str(&self.0)?;
        match value {
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(DecodeError::NotAnObject(json_kind(&other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Render a scalar JSON value as text. Numbers keep their decimal form.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

// ── Lenient field deserializers ───────────────────────────────

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(scalar_text(&value))
}

fn string_only<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn lenient_object<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(d)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(serde_json::from_value(value).ok())
}

fn lenient_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Value>, D::Error> {
    match Value::deserialize(d)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

fn encoded_cells<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<EncodedCell>, D::Error> {
    let items = lenient_list(d)?;
    Ok(items
        .into_iter()
        .map(|item| match item {
            Value::String(raw) => EncodedCell(raw),
            // Already-decoded elements keep their JSON text and decode normally.
            other => EncodedCell(other.to_string()),
        })
        .collect())
}
