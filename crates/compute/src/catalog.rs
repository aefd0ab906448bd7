use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipeline::{Dimension, Weighting};

/// Default number of first-seen categories kept by the scatter chart.
const DEFAULT_SCATTER_LIMIT: i64 = 15;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("chart with empty name")]
    EmptyName,

    #[error("duplicate chart name: {0}")]
    DuplicateName(String),

    #[error("chart '{name}': primary dimension '{dimension}' fans out; use it as the secondary")]
    FanOutPrimary { name: String, dimension: Dimension },

    #[error("unknown chart: {0}")]
    UnknownChart(String),

    #[error("chart '{name}': unknown field '{field}' for kind '{kind}'")]
    UnknownField { name: String, kind: String, field: String },
}

/// Ordering of a count chart's entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Descending by value, ties in first-seen order.
    #[default]
    Ranked,
    /// First-seen order, unsorted (pie and treemap layouts).
    Insertion,
}

/// One named aggregation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: ChartKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartKind {
    /// Single-key table. `top` truncates the ordered entries; zero or negative
    /// selects nothing, absent keeps everything.
    Count {
        dimension: Dimension,
        #[serde(default)]
        weighting: Weighting,
        #[serde(default)]
        top: Option<i64>,
        #[serde(default)]
        order: Order,
    },
    /// Primary × secondary grid over the top categories of each marginal.
    Cross {
        primary: Dimension,
        secondary: Dimension,
        #[serde(default)]
        weighting: Weighting,
        top_primary: i64,
        top_secondary: i64,
        /// Keep zero-valued cells (heatmap) or drop them (bubble chart).
        #[serde(default = "default_true")]
        include_empty: bool,
    },
    /// Filings per month.
    Timeline,
    /// Class/subject points over the first-seen categories.
    Scatter {
        #[serde(default = "default_scatter_limit")]
        limit: i64,
    },
}

fn default_true() -> bool {
    true
}

fn default_scatter_limit() -> i64 {
    DEFAULT_SCATTER_LIMIT
}

impl ChartSpec {
    pub fn new(name: impl Into<String>, kind: ChartKind) -> Self {
        Self { name: name.into(), kind }
    }

    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            ChartKind::Count { .. } => "count",
            ChartKind::Cross { .. } => "cross",
            ChartKind::Timeline => "timeline",
            ChartKind::Scatter { .. } => "scatter",
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if let ChartKind::Cross { primary, .. } = &self.kind {
            if primary.fans_out() {
                return Err(CatalogError::FanOutPrimary {
                    name: self.name.clone(),
                    dimension: *primary,
                });
            }
        }
        Ok(())
    }
}

/// Fields a chart table may carry besides `name` and `kind`, or `None` for an
/// unrecognized kind.
fn kind_fields(kind: &str) -> Option<&'static [&'static str]> {
    match kind {
        "count" => Some(&["dimension", "weighting", "top", "order"]),
        "cross" => Some(&[
            "primary",
            "secondary",
            "weighting",
            "top_primary",
            "top_secondary",
            "include_empty",
        ]),
        "timeline" => Some(&[]),
        "scatter" => Some(&["limit"]),
        _ => None,
    }
}

/// Reject keys a chart table of `kind` does not define.
///
/// Flattened specs drop unknown keys while deserializing, so a misspelled
/// `top` would silently select everything; loaders run this on the raw table
/// first. Unrecognized kinds are left to deserialization to report.
pub fn check_chart_fields<'a>(
    name: &str,
    kind: &str,
    keys: impl IntoIterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let Some(allowed) = kind_fields(kind) else {
        return Ok(());
    };
    for key in keys {
        if key != "name" && key != "kind" && !allowed.contains(&key) {
            return Err(CatalogError::UnknownField {
                name: name.to_string(),
                kind: kind.to_string(),
                field: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Check every spec and reject duplicate names.
pub fn validate_catalog(specs: &[ChartSpec]) -> Result<(), CatalogError> {
    let mut names = HashSet::new();
    for spec in specs {
        spec.validate()?;
        if !names.insert(spec.name.as_str()) {
            return Err(CatalogError::DuplicateName(spec.name.clone()));
        }
    }
    Ok(())
}

/// Keep only the named charts, in catalog order.
pub fn select<'a>(specs: &'a [ChartSpec], names: &[String]) -> Result<Vec<&'a ChartSpec>, CatalogError> {
    if let Some(unknown) = names.iter().find(|n| !specs.iter().any(|s| &s.name == *n)) {
        return Err(CatalogError::UnknownChart(unknown.clone()));
    }
    Ok(specs.iter().filter(|s| names.contains(&s.name)).collect())
}

fn count(dimension: Dimension, top: Option<i64>, order: Order) -> ChartKind {
    ChartKind::Count { dimension, weighting: Weighting::Occurrences, top, order }
}

/// Charts of the exploratory dashboard.
pub fn default_catalog() -> Vec<ChartSpec> {
    vec![
        ChartSpec::new("classe_bars", count(Dimension::Classe, None, Order::Insertion)),
        ChartSpec::new("classe_bars_top20", count(Dimension::Classe, Some(20), Order::Ranked)),
        ChartSpec::new("classe_ranking", count(Dimension::Classe, None, Order::Ranked)),
        ChartSpec::new("classe_donut_top5", count(Dimension::Classe, Some(5), Order::Ranked)),
        ChartSpec::new("classe_pie", count(Dimension::Classe, None, Order::Insertion)),
        ChartSpec::new("classe_pie_top5", count(Dimension::Classe, Some(5), Order::Ranked)),
        ChartSpec::new("grau_pie", count(Dimension::Grau, None, Order::Insertion)),
        ChartSpec::new("assunto_bars_top20", count(Dimension::Assunto, Some(20), Order::Ranked)),
        ChartSpec::new(
            "bubble_classe_assunto",
            ChartKind::Cross {
                primary: Dimension::Classe,
                secondary: Dimension::Assunto,
                weighting: Weighting::Movements,
                top_primary: 10,
                top_secondary: 15,
                include_empty: false,
            },
        ),
        ChartSpec::new(
            "heatmap_classe_assunto",
            ChartKind::Cross {
                primary: Dimension::Classe,
                secondary: Dimension::Assunto,
                weighting: Weighting::Occurrences,
                top_primary: 10,
                top_secondary: 15,
                include_empty: true,
            },
        ),
        ChartSpec::new("filings_per_month", ChartKind::Timeline),
        ChartSpec::new("orgao_codigo_bars", count(Dimension::OrgaoCodigo, None, Order::Ranked)),
        ChartSpec::new("orgao_treemap", count(Dimension::OrgaoNome, None, Order::Insertion)),
        ChartSpec::new("assunto_pie_top10", count(Dimension::Assunto, Some(10), Order::Ranked)),
        ChartSpec::new("assunto_pie_top15", count(Dimension::Assunto, Some(15), Order::Ranked)),
        ChartSpec::new("assunto_mosaic_top50", count(Dimension::Assunto, Some(50), Order::Ranked)),
        ChartSpec::new("scatter_classe_assunto", ChartKind::Scatter { limit: DEFAULT_SCATTER_LIMIT }),
    ]
}
