use std::path::PathBuf;

use clap::Parser;

/// Aggregate a judicial-process dump into chart-ready tables.
///
/// Loads a search-result envelope, evaluates the chart catalog over it and
/// writes one JSON document with every chart's data.
#[derive(Parser, Debug)]
#[command(name = "juris", about = "Chart aggregations over DataJud process dumps")]
pub struct CliArgs {
    /// Search-result envelope to load (overrides JURIS_DATA_PATH)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Path to chart catalog (default: ~/.config/juris/charts.toml)
    #[arg(long)]
    pub config: Option<String>,

    /// Only evaluate the named chart (repeatable)
    #[arg(long = "chart", value_name = "NAME")]
    pub charts: Vec<String>,

    /// List the catalog's charts and exit
    #[arg(long)]
    pub list: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write the JSON output to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Evaluate charts one after another instead of on the thread pool
    #[arg(long)]
    pub sequential: bool,
}
