//! Lazy dataset loading and the pre-scan column projection.
//!
//! The scanner only ever sees a `LazyFrame`; loading stays metadata-only
//! until the orchestrator's single collect.

use polars::prelude::*;
use std::path::Path;

use crate::error::{Result, ScanError};

/// Opens a tabular file as a lazy frame without reading row data.
pub fn scan_dataset(path: &Path) -> Result<LazyFrame> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(10000))
                .with_has_header(true)
                .finish()?;
            Ok(lf)
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(path, Default::default())?;
            Ok(lf)
        }
        "json" => {
            // Polars doesn't have a truly lazy JSON reader in the same way
            // as CSV/Parquet, so read eagerly and convert.
            let df = JsonReader::new(std::fs::File::open(path)?).finish()?;
            Ok(df.lazy())
        }
        _ => Err(ScanError::Config(format!(
            "Unsupported file extension: {ext}"
        ))),
    }
}

/// Drops the named columns by selecting everything else, validating the
/// names against the schema first.
///
/// Identifier columns carry near-maximal entropy by definition and drown
/// out every grouping they appear in, so callers exclude them here before
/// the scan. A name missing from the schema is rejected rather than
/// ignored: a typo would otherwise silently change which combinations get
/// scored.
pub fn drop_columns(mut lf: LazyFrame, drop: &[String]) -> Result<LazyFrame> {
    if drop.is_empty() {
        return Ok(lf);
    }

    let schema = lf.collect_schema()?;

    for name in drop {
        if !schema.contains(name.as_str()) {
            return Err(ScanError::Config(format!(
                "Cannot drop unknown column '{name}'"
            )));
        }
    }

    let keep: Vec<Expr> = schema
        .iter_names()
        .filter(|name| !drop.iter().any(|d| d == name.as_str()))
        .map(|name| col(name.as_str()))
        .collect();

    Ok(lf.select(keep))
}
