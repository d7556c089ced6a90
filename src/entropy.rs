//! Entropy expression building and the batched scan itself.
//!
//! Each column combination maps to one deferred expression: join the
//! combination's values row-wise, count the distinct joined strings, take
//! the Shannon entropy of that distribution, and label the result with the
//! `_`-joined column names. Nothing touches data until [`multi_entropy`]
//! submits every expression together in a single select and materializes
//! it once — N entropy scores for one scan of the dataset, not N scans.

use polars::prelude::*;
use std::collections::HashSet;

use crate::combinations::collect_column_combinations;
use crate::engine::EngineMode;
use crate::error::{Result, ScanError};

/// Separator used both for the row-wise value join and the result labels.
pub const JOIN_SEPARATOR: &str = "_";

/// Result of one scan: the single-row entropy table plus how much of the
/// requested combination quota the schema could actually support.
#[derive(Debug)]
pub struct EntropyReport {
    pub table: DataFrame,
    pub requested: usize,
    pub achieved: usize,
}

impl EntropyReport {
    pub fn quota_met(&self) -> bool {
        self.achieved == self.requested
    }

    pub fn shortfall(&self) -> usize {
        self.requested - self.achieved
    }
}

/// Label for a combination: its column names joined with the separator.
pub fn joint_label(columns: &[String]) -> String {
    columns.join(JOIN_SEPARATOR)
}

fn entropy_expr(columns: &[String], label: &str) -> Expr {
    let members: Vec<Expr> = columns.iter().map(|c| col(c.as_str())).collect();
    concat_str(members, JOIN_SEPARATOR, false)
        .unique_counts()
        .entropy(std::f64::consts::E, true)
        .alias(label)
}

/// Builds one labeled, deferred entropy expression per combination.
///
/// No data is read here. Column names that contain the separator can make
/// two distinct combinations join to the same label; that batch is
/// rejected with [`ScanError::LabelCollision`] rather than letting one
/// result column silently shadow the other.
pub fn build_entropy_expressions(combinations: &[Vec<String>]) -> Result<Vec<Expr>> {
    let mut seen: HashSet<String> = HashSet::with_capacity(combinations.len());
    let mut exprs = Vec::with_capacity(combinations.len());

    for columns in combinations {
        let label = joint_label(columns);
        if !seen.insert(label.clone()) {
            return Err(ScanError::LabelCollision(label));
        }
        exprs.push(entropy_expr(columns, &label));
    }

    Ok(exprs)
}

/// Scores up to `total` column combinations of the frame by Shannon
/// entropy, in one batched engine execution.
///
/// Column names come from schema metadata only; the dataset is scanned
/// exactly once, when the batched select is collected under `engine`.
/// If the schema cannot supply `total` combinations the scan proceeds
/// with what exists and the report records the shortfall. Engine failures
/// (an expression unsupported by the chosen mode, memory exhaustion)
/// propagate unmodified.
pub fn multi_entropy(mut lf: LazyFrame, total: usize, engine: EngineMode) -> Result<EntropyReport> {
    let schema = lf.collect_schema()?;
    let columns: Vec<String> = schema.iter_names().map(|n| n.to_string()).collect();

    let batch = collect_column_combinations(total, &columns);
    if !batch.quota_met() {
        tracing::warn!(
            "Schema supports only {} of the {} requested combinations",
            batch.len(),
            batch.requested
        );
    }

    let achieved = batch.len();
    let exprs = build_entropy_expressions(&batch.combinations)?;
    let table = engine.collect(lf.select(exprs))?;

    Ok(EntropyReport {
        table,
        requested: total,
        achieved,
    })
}
