use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use juris_compute::{check_chart_fields, default_catalog, validate_catalog, ChartSpec};

/// Chart catalog loaded from a TOML file of `[[chart]]` tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default = "default_catalog", rename = "chart")]
    pub charts: Vec<ChartSpec>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self { charts: default_catalog() }
    }
}

impl CliConfig {
    /// Return the default config directory path: ~/.config/juris/
    pub fn default_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join("juris");
        Ok(config_dir)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("charts.toml"))
    }

    /// Load the catalog from the given path, or the default path.
    /// Falls back to the built-in catalog when the file does not exist.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        let config = if config_path.exists() {
            debug!(?config_path, "Loading chart catalog");
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read config: {}", config_path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("failed to parse config: {}", config_path.display()))?
        } else {
            debug!(?config_path, "Catalog file not found, using built-in charts");
            Self::default()
        };

        validate_catalog(&config.charts).context("invalid chart catalog")?;
        Ok(config)
    }

    fn parse(content: &str) -> Result<Self> {
        let raw: toml::Table = toml::from_str(content)?;
        if let Some(charts) = raw.get("chart").and_then(toml::Value::as_array) {
            for chart in charts.iter().filter_map(toml::Value::as_table) {
                let name = chart.get("name").and_then(toml::Value::as_str).unwrap_or("");
                let kind = chart.get("kind").and_then(toml::Value::as_str).unwrap_or("");
                check_chart_fields(name, kind, chart.keys().map(String::as_str))?;
            }
        }
        Ok(toml::from_str(content)?)
    }
}
