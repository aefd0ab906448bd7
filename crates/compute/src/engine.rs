use std::borrow::Borrow;
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use juris_core::{category, Record, RecordStore};

use crate::catalog::{CatalogError, ChartKind, ChartSpec, Order};
use crate::pipeline::{
    build_grid, clamp_limit, count_by, count_pairs, in_insertion_order, keys_of, monthly_filings,
    observed_cells, scatter_points, sorted, top_n, FilingTimeline, GridCell, Ranked,
    ScatterSelection,
};

/// Data behind one chart, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartOutput {
    Count {
        /// Sum over the whole table, before truncation.
        total: f64,
        /// Sum over the returned entries.
        shown_total: f64,
        entries: Vec<Ranked<String>>,
    },
    Cross {
        primary: Vec<Ranked<String>>,
        secondary: Vec<Ranked<String>>,
        cells: Vec<GridCell<String, String>>,
    },
    Timeline(FilingTimeline),
    Scatter(ScatterSelection),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartResult {
    pub name: String,
    pub output: ChartOutput,
}

/// Compute one chart over `records`.
pub fn evaluate(spec: &ChartSpec, records: &[Record]) -> Result<ChartOutput, CatalogError> {
    spec.validate()?;

    let output = match &spec.kind {
        ChartKind::Count { dimension, weighting, top, order } => {
            let table = count_by(records, |r| dimension.keys(r), |r| weighting.weight(r));
            let mut entries = match order {
                Order::Ranked => sorted(&table),
                Order::Insertion => in_insertion_order(&table),
            };
            if let Some(n) = top {
                entries.truncate(clamp_limit(*n));
            }
            ChartOutput::Count {
                total: table.total(),
                shown_total: entries.iter().map(|e| e.value).sum(),
                entries,
            }
        }
        ChartKind::Cross {
            primary,
            secondary,
            weighting,
            top_primary,
            top_secondary,
            include_empty,
        } => {
            let path = primary.field().ok_or_else(|| CatalogError::FanOutPrimary {
                name: spec.name.clone(),
                dimension: *primary,
            })?;
            let tables = count_pairs(
                records,
                |r| category(r, path),
                |r| secondary.keys(r),
                |r| weighting.weight(r),
            );

            let top_p = top_n(&tables.marginal_primary, clamp_limit(*top_primary));
            let top_s = top_n(&tables.marginal_secondary, clamp_limit(*top_secondary));
            let mut cells = build_grid(&keys_of(&top_p), &keys_of(&top_s), &tables.joint);
            if !include_empty {
                cells = observed_cells(cells);
            }
            ChartOutput::Cross { primary: top_p, secondary: top_s, cells }
        }
        ChartKind::Timeline => ChartOutput::Timeline(monthly_filings(records)),
        ChartKind::Scatter { limit } => {
            ChartOutput::Scatter(scatter_points(records, clamp_limit(*limit)))
        }
    };

    debug!(chart = %spec.name, kind = spec.kind_label(), "chart evaluated");
    Ok(output)
}

/// Evaluate every spec against the store, preserving spec order.
///
/// Specs are independent scans over a shared read-only store, so with
/// `parallel` they run on the rayon pool.
pub fn run_catalog<S>(store: &RecordStore, specs: &[S], parallel: bool) -> Result<Vec<ChartResult>, CatalogError>
where
    S: Borrow<ChartSpec> + Sync,
{
    let start = Instant::now();
    let records = store.records();

    let run = |spec: &S| -> Result<ChartResult, CatalogError> {
        let spec = spec.borrow();
        Ok(ChartResult {
            name: spec.name.clone(),
            output: evaluate(spec, records)?,
        })
    };

    let results: Result<Vec<_>, _> = if parallel {
        specs.par_iter().map(run).collect()
    } else {
        specs.iter().map(run).collect()
    };
    let results = results?;

    info!(
        charts = results.len(),
        records = store.len(),
        parallel,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "catalog complete"
    );
    Ok(results)
}
