use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use entroscan::config::{DEFAULT_COMBINATIONS, ScanConfig, load_scan_config};
use entroscan::dataset::{drop_columns, scan_dataset};
use entroscan::engine::EngineMode;
use entroscan::entropy::multi_entropy;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "entroscan",
    about = "Column-combination entropy scanner for tabular files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score column combinations of a file under a single engine mode
    Scan {
        /// Path to the file to scan (CSV, Parquet, JSON)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Maximum number of column combinations to score
        #[arg(short = 'n', long, default_value_t = DEFAULT_COMBINATIONS)]
        combinations: usize,

        /// Column to exclude before scanning (repeatable)
        #[arg(short, long)]
        drop: Vec<String>,

        /// Engine used to materialize the result
        #[arg(long, value_enum, default_value_t = EngineMode::InMemory)]
        engine: EngineMode,

        /// Path to a JSON scan configuration file (replaces the flags above)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run the same scan once per engine mode, timing each run
    Compare {
        /// Path to the file to scan (CSV, Parquet, JSON)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Maximum number of column combinations to score
        #[arg(short = 'n', long, default_value_t = DEFAULT_COMBINATIONS)]
        combinations: usize,

        /// Column to exclude before scanning (repeatable)
        #[arg(short, long)]
        drop: Vec<String>,

        /// Path to a JSON scan configuration file (replaces the flags above)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Scan {
            file,
            combinations,
            drop,
            engine,
            config,
        } => {
            let config = resolve_config(file, combinations, drop, engine, config)?;
            run_scan(&config, config.engine)
        }
        Commands::Compare {
            file,
            combinations,
            drop,
            config,
        } => {
            let config = resolve_config(file, combinations, drop, EngineMode::InMemory, config)?;
            // Two explicit, independent runs over the same parameters.
            run_scan(&config, EngineMode::InMemory)?;
            run_scan(&config, EngineMode::Streaming)
        }
    }
}

fn resolve_config(
    file: Option<PathBuf>,
    combinations: usize,
    drop: Vec<String>,
    engine: EngineMode,
    config_path: Option<PathBuf>,
) -> Result<ScanConfig> {
    if let Some(path) = config_path {
        return load_scan_config(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let file = file.context("No input file provided (use --file or --config)")?;
    Ok(ScanConfig {
        file,
        combinations,
        drop,
        engine,
    })
}

fn run_scan(config: &ScanConfig, engine: EngineMode) -> Result<()> {
    tracing::info!(
        "Scanning {} for up to {} combinations with the {engine} engine",
        config.file.display(),
        config.combinations
    );
    println!("Running with the {engine} engine...");

    let lf = scan_dataset(&config.file)
        .with_context(|| format!("Failed to open {}", config.file.display()))?;
    let lf = drop_columns(lf, &config.drop).context("Failed to apply column drops")?;

    let start = Instant::now();
    let report = multi_entropy(lf, config.combinations, engine).context("Entropy scan failed")?;
    let elapsed = start.elapsed();

    println!("{}", report.table);
    if !report.quota_met() {
        println!(
            "Note: the schema supports only {} of the {} requested combinations.",
            report.achieved, report.requested
        );
    }
    println!(
        "{engine} engine scored {} combinations in {:.3}s",
        report.achieved,
        elapsed.as_secs_f64()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_config_requires_a_file() {
        let result = resolve_config(None, 10, Vec::new(), EngineMode::InMemory, None);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_config_from_flags() -> Result<()> {
        let config = resolve_config(
            Some(PathBuf::from("data.csv")),
            25,
            vec!["id".to_owned()],
            EngineMode::Streaming,
            None,
        )?;
        assert_eq!(config.file, PathBuf::from("data.csv"));
        assert_eq!(config.combinations, 25);
        assert_eq!(config.drop, vec!["id".to_owned()]);
        assert_eq!(config.engine, EngineMode::Streaming);
        Ok(())
    }
}
