//! Execution mode selection for the single materialize call.
//!
//! Polars can materialize a lazy plan whole-dataset-in-memory or through
//! its chunked streaming engine. The two differ in memory footprint and in
//! which expressions they support natively, so the mode is a closed enum
//! rather than a pass-through string: an unknown mode fails at parse time,
//! not inside the engine.

use clap::ValueEnum;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScanError};

/// Strategy used to materialize the batched entropy plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineMode {
    /// Load and process the whole dataset in memory.
    InMemory,
    /// Process the dataset in chunks with bounded memory.
    Streaming,
}

impl EngineMode {
    /// Materializes the plan under this mode. This is the only collect in
    /// the scan pipeline; engine failures propagate unmodified, with no
    /// retry and no fallback to the other mode.
    pub fn collect(self, lf: LazyFrame) -> Result<DataFrame> {
        let df = match self {
            Self::InMemory => lf.collect()?,
            Self::Streaming => lf.with_streaming(true).collect()?,
        };
        Ok(df)
    }
}

impl fmt::Display for EngineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InMemory => write!(f, "in-memory"),
            Self::Streaming => write!(f, "streaming"),
        }
    }
}

impl FromStr for EngineMode {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "in-memory" => Ok(Self::InMemory),
            "streaming" => Ok(Self::Streaming),
            other => Err(ScanError::Config(format!(
                "Unknown engine mode '{other}' (expected 'in-memory' or 'streaming')"
            ))),
        }
    }
}
