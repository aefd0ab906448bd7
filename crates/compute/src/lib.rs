pub mod catalog;
pub mod engine;
pub mod pipeline;

pub use catalog::{
    check_chart_fields, default_catalog, select, validate_catalog, CatalogError, ChartKind,
    ChartSpec, Order,
};
pub use engine::{evaluate, run_catalog, ChartOutput, ChartResult};
pub use pipeline::{
    build_grid, count_by, count_pairs, top_n, Dimension, FrequencyTable, GridCell, JointTables,
    Ranked, Weighting,
};
