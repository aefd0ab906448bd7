//! Aggregation pipeline.
//!
//! Every function here is a pure scan over borrowed records:
//!
//! - **counter**: single-key frequency tables with optional fan-out and weight.
//! - **cooccurrence**: joint `(primary, secondary)` tables plus marginals.
//! - **top_n** / **grid**: deterministic selections and zero-filled grids.
//! - **timeline**, **scatter**, **drilldown**: chart-specific shapes.

pub mod cooccurrence;
pub mod counter;
pub mod dimension;
pub mod drilldown;
pub mod grid;
pub mod scatter;
pub mod table;
pub mod timeline;
pub mod top_n;

pub use cooccurrence::{count_pairs, JointTables};
pub use counter::{count_by, Weighting};
pub use dimension::{Dimension, DimensionKeys};
pub use drilldown::{processes_in_cell, UNNUMBERED};
pub use grid::{build_grid, observed_cells, GridCell};
pub use scatter::{scatter_points, Cluster, ScatterPoint, ScatterSelection};
pub use table::FrequencyTable;
pub use timeline::{monthly_filings, FilingTimeline, MonthCount};
pub use top_n::{clamp_limit, in_insertion_order, keys_of, sorted, top_n, Ranked};
