//! # Application Config
//!
//! Environment-driven configuration for the `stockroom` binary.

use anyhow::Context;
use std::path::{Path, PathBuf};
use stock_core::StockManifest;

/// Default locations searched for the stock manifest
pub const MANIFEST_SEARCH_PATHS: [&str; 3] = [
    "config/stock.toml",
    "../config/stock.toml",
    "../../config/stock.toml",
];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl LogFormat {
    /// Parse a format name; anything unrecognised falls back to `Pretty`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Explicit manifest path (`STOCKROOM_MANIFEST`)
    pub manifest_path: Option<PathBuf>,
    /// Log format (`STOCKROOM_LOG_FORMAT`)
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            manifest_path: std::env::var("STOCKROOM_MANIFEST").ok().map(PathBuf::from),
            log_format: std::env::var("STOCKROOM_LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Read and parse the manifest, either from the configured path or the
    /// first default location that exists
    pub fn load_manifest(&self) -> anyhow::Result<(PathBuf, StockManifest)> {
        if let Some(path) = &self.manifest_path {
            let manifest = read_manifest(path)?;
            return Ok((path.clone(), manifest));
        }

        for path in MANIFEST_SEARCH_PATHS.iter().map(Path::new) {
            if path.is_file() {
                let manifest = read_manifest(path)?;
                return Ok((path.to_path_buf(), manifest));
            }
        }

        anyhow::bail!(
            "no stock manifest found; set STOCKROOM_MANIFEST or create {}",
            MANIFEST_SEARCH_PATHS[0]
        )
    }
}

fn read_manifest(path: &Path) -> anyhow::Result<StockManifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let manifest = StockManifest::from_toml(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(manifest)
}
