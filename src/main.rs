//! Entry point for the entroscan binary.
//!
//! Parses the CLI, initializes logging, and dispatches to the scan or
//! compare command. All actual work lives in the library crate.

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use clap::Parser as _;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    entroscan::logging::init()?;

    let cli = cli::Cli::parse();
    cli::run_command(cli.command)?;

    Ok(())
}
