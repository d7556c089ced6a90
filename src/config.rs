//! Run parameters for a scan.
//!
//! Everything the entry point used to hardcode lives here instead: the
//! dataset path, the requested combination count, the columns to exclude,
//! and the engine mode. A config can come from CLI flags or from a JSON
//! file, and the same value drives `scan` and `compare` alike.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::engine::EngineMode;
use crate::error::Result;

/// Requested combination count when none is given.
pub const DEFAULT_COMBINATIONS: usize = 1000;

/// Parameters for one entropy scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Dataset to scan (CSV, Parquet, or JSON).
    pub file: PathBuf,

    /// Maximum number of column combinations to score.
    #[serde(default = "default_combinations")]
    pub combinations: usize,

    /// Columns excluded before the scan sees the frame.
    #[serde(default)]
    pub drop: Vec<String>,

    /// Engine mode for the single materialize call. `compare` ignores this
    /// and runs both modes.
    #[serde(default = "default_engine")]
    pub engine: EngineMode,
}

fn default_combinations() -> usize {
    DEFAULT_COMBINATIONS
}

fn default_engine() -> EngineMode {
    EngineMode::InMemory
}

/// Loads a scan configuration from a JSON file.
pub fn load_scan_config(path: &Path) -> Result<ScanConfig> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
