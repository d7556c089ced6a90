//! Integration tests for the full scan workflow
//!
//! These tests run the complete pipeline on fixture files: lazy load,
//! column drop, combination enumeration, and the single batched entropy
//! execution under both engine modes.

use entroscan::config::load_scan_config;
use entroscan::dataset::{drop_columns, scan_dataset};
use entroscan::engine::EngineMode;
use entroscan::entropy::{EntropyReport, multi_entropy};
use entroscan::error::Result;
use std::path::Path;

fn scan_survey(total: usize, engine: EngineMode) -> Result<EntropyReport> {
    let lf = scan_dataset(Path::new("testdata/survey.csv"))?;
    let lf = drop_columns(lf, &["id".to_owned()])?;
    multi_entropy(lf, total, engine)
}

#[test]
fn test_scan_csv_end_to_end() {
    // 4 columns after the drop: 6 pairs + 4 triples + 1 quadruple.
    let report = scan_survey(11, EngineMode::InMemory).expect("Scan should succeed");

    assert_eq!(report.table.height(), 1, "One row regardless of combination count");
    assert_eq!(report.table.width(), 11);
    assert!(report.quota_met());

    let names: Vec<String> = report
        .table
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "country_language",
            "country_role",
            "country_remote",
            "language_role",
            "language_remote",
            "role_remote",
            "country_language_role",
            "country_language_remote",
            "country_role_remote",
            "language_role_remote",
            "country_language_role_remote",
        ],
        "Labels follow enumeration order: pairs first, then larger sizes"
    );
}

#[test]
fn test_dropped_column_never_scored() {
    let report = scan_survey(11, EngineMode::InMemory).expect("Scan should succeed");

    for name in report.table.get_column_names() {
        assert!(
            !name.as_str().split('_').any(|part| part == "id"),
            "Dropped column leaked into label {name}"
        );
    }
}

#[test]
fn test_pair_entropy_matches_hand_computation() {
    let report = scan_survey(1, EngineMode::InMemory).expect("Scan should succeed");
    assert_eq!(report.table.width(), 1);

    // country_language joins to counts [2, 1, 1, 2, 3, 1] over 10 rows:
    // H = ln 10 - (4 ln 2 + 3 ln 3) / 10
    let expected = 10f64.ln() - (4.0 * 2f64.ln() + 3.0 * 3f64.ln()) / 10.0;
    let got = report
        .table
        .column("country_language")
        .expect("Label present")
        .as_materialized_series()
        .f64()
        .expect("Entropy is f64")
        .get(0)
        .expect("Value present");
    assert!(
        (got - expected).abs() < 1e-9,
        "Expected {expected}, got {got}"
    );
}

#[test]
fn test_quota_beyond_schema_reports_shortfall() {
    // The 4 remaining columns admit only 11 combinations of size >= 2;
    // asking for 100 must terminate and say how far short it fell.
    let report = scan_survey(100, EngineMode::InMemory).expect("Scan should succeed");

    assert_eq!(report.achieved, 11);
    assert_eq!(report.table.width(), 11);
    assert!(!report.quota_met());
    assert_eq!(report.shortfall(), 89);
}

#[test]
fn test_engine_modes_agree_on_fixture() {
    let in_memory = scan_survey(11, EngineMode::InMemory).expect("In-memory scan");
    let streaming = scan_survey(11, EngineMode::Streaming).expect("Streaming scan");

    assert_eq!(in_memory.table.width(), streaming.table.width());
    for name in in_memory.table.get_column_names() {
        let a = in_memory
            .table
            .column(name)
            .expect("Column present")
            .as_materialized_series()
            .f64()
            .expect("f64")
            .get(0)
            .expect("Value");
        let b = streaming
            .table
            .column(name)
            .expect("Column present")
            .as_materialized_series()
            .f64()
            .expect("f64")
            .get(0)
            .expect("Value");
        assert!(
            (a - b).abs() < 1e-12,
            "Modes disagree on {name}: {a} vs {b}"
        );
    }
}

#[test]
fn test_scan_from_config_file() {
    let config =
        load_scan_config(Path::new("testdata/scan_config.json")).expect("Config should load");
    assert_eq!(config.engine, EngineMode::Streaming);

    let lf = scan_dataset(&config.file).expect("Fixture should open");
    let lf = drop_columns(lf, &config.drop).expect("Drop should apply");
    let report =
        multi_entropy(lf, config.combinations, config.engine).expect("Scan should succeed");

    assert_eq!(report.table.width(), 11);
    assert!(report.quota_met());
}

#[test]
fn test_unknown_drop_column_returns_error() {
    let lf = scan_dataset(Path::new("testdata/survey.csv")).expect("Fixture should open");
    let result = drop_columns(lf, &["does_not_exist".to_owned()]);
    assert!(result.is_err(), "Typo in a drop name should not pass silently");
}

#[test]
fn test_nonexistent_file_returns_error() {
    let result = scan_dataset(Path::new("testdata/does_not_exist.csv"))
        .and_then(|lf| multi_entropy(lf, 5, EngineMode::InMemory));
    assert!(result.is_err(), "Missing file should surface as an error");
}
