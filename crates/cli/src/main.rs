mod cli;
mod config;

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use juris_compute::{run_catalog, select, ChartSpec};
use juris_core::Config;

use crate::cli::CliArgs;
use crate::config::CliConfig;

/// Document written to stdout or `--output`.
#[derive(Serialize)]
struct Report {
    records: usize,
    charts: serde_json::Map<String, serde_json::Value>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    juris_core::config::load_dotenv();
    let args = CliArgs::parse();

    let catalog = CliConfig::load(args.config.as_deref())
        .context("failed to load chart catalog")?;

    if args.list {
        let mut stdout = std::io::stdout().lock();
        for spec in &catalog.charts {
            writeln!(stdout, "{}\t{}", spec.name, spec.kind_label())?;
        }
        return Ok(());
    }

    let mut config = Config::from_env();
    if let Some(path) = args.data {
        config.data.path = path;
    }
    if args.sequential {
        config.compute.parallel = false;
    }
    config.log_summary();

    let specs: Vec<&ChartSpec> = if args.charts.is_empty() {
        catalog.charts.iter().collect()
    } else {
        select(&catalog.charts, &args.charts)?
    };

    let store = juris_ingest::load_from_config(&config.data)
        .with_context(|| format!("failed to load records from {}", config.data.path.display()))?;

    let results = run_catalog(&store, &specs, config.compute.parallel)?;

    let mut charts = serde_json::Map::new();
    for result in results {
        charts.insert(result.name, serde_json::to_value(&result.output)?);
    }
    let report = Report { records: store.len(), charts };

    let body = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, body)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{body}")?;
        }
    }

    Ok(())
}
