//! # entroscan - Column-Combination Entropy Scanner
//!
//! entroscan screens a wide tabular schema for informative column
//! groupings without hand-picking them: it enumerates combinations of
//! columns (pairs first, growing the combination size until a requested
//! count is reached), scores each combination by the Shannon entropy of
//! its joined row values, and computes every score in a single batched
//! Polars execution.
//!
//! ## Quick Start
//!
//! ```no_run
//! use entroscan::dataset::{drop_columns, scan_dataset};
//! use entroscan::engine::EngineMode;
//! use entroscan::entropy::multi_entropy;
//! use std::path::Path;
//!
//! # fn example() -> entroscan::error::Result<()> {
//! let lf = scan_dataset(Path::new("survey.csv"))?;
//! let lf = drop_columns(lf, &["id".to_owned()])?;
//!
//! // One scan of the data, however many combinations were scored
//! let report = multi_entropy(lf, 1000, EngineMode::InMemory)?;
//! println!("{}", report.table);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`combinations`]: bounded enumeration and the escalating-size search
//! - [`entropy`]: deferred expression building and the batched scan
//! - [`engine`]: execution mode for the single materialize call
//! - [`dataset`]: lazy loaders and the pre-scan column projection
//! - [`config`]: run parameters, loadable from JSON
//! - [`error`]: error types and the crate `Result` alias
//!
//! ## Key Concept: One Pass, Many Scores
//!
//! Every entropy expression is deferred. The orchestrator submits them
//! all in one `select` and collects once, so scoring N combinations costs
//! one pass over the dataset rather than N:
//!
//! ```no_run
//! use polars::prelude::*;
//!
//! let lf = LazyCsvReader::new("survey.csv").finish()?;
//! // Nothing executed yet - just a query plan
//! let df = lf.select([len()]).collect()?; // Now data is processed
//! # Ok::<(), PolarsError>(())
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod combinations;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod entropy;
pub mod error;
pub mod logging;
