use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_bool(profile: &str, key: &str, default: bool) -> bool {
    match profiled_env_opt(profile, key) {
        Some(v) => matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"),
        None => default,
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub data: DataConfig,
    pub compute: ComputeConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `JURIS_PROFILE`. When set (e.g. `TJSP`), every key
    /// is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("JURIS_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            data: DataConfig::from_env_profiled(p),
            compute: ComputeConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  data:     path={}, table={}, buffer={}",
            self.data.path.display(),
            self.data.table,
            self.data.source_buffer
        );
        tracing::info!("  compute:  parallel={}", self.compute.parallel);
    }
}

// ── Data source ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Search-result envelope to load.
    pub path: PathBuf,
    /// Table the records are materialized into.
    pub table: String,
    /// Name under which the raw JSON buffer is registered.
    pub source_buffer: String,
}

impl DataConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            path: PathBuf::from(profiled_env_or(p, "JURIS_DATA_PATH", "data/tjrj.json")),
            table: profiled_env_or(p, "JURIS_TABLE", "dados_tjrj"),
            source_buffer: profiled_env_or(p, "JURIS_SOURCE_TABLE", "dados_processado"),
        }
    }
}

// ── Compute ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeConfig {
    /// Evaluate independent charts on the rayon pool.
    pub parallel: bool,
}

impl ComputeConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            parallel: profiled_env_bool(p, "JURIS_PARALLEL", true),
        }
    }
}
