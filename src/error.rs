//! Error types for the scanner library.
//!
//! Library code returns [`ScanError`] through the crate-local [`Result`]
//! alias; the binary layers `anyhow` context on top at the boundary. The
//! `From` implementations let `?` convert I/O, Polars, and JSON errors
//! without ceremony.

use std::fmt;

/// Main error type for scan operations.
#[derive(Debug)]
pub enum ScanError {
    /// I/O errors (file operations, log directory creation, etc.)
    Io(std::io::Error),

    /// Data processing errors surfaced by Polars
    DataProcessing(String),

    /// Configuration errors (bad JSON, unknown engine mode, invalid values)
    Config(String),

    /// Two column combinations produced the same result label.
    ///
    /// Happens when column names themselves contain the join separator,
    /// e.g. `["a", "b_c"]` and `["a_b", "c"]` both label as `a_b_c`.
    /// Silently overwriting one result with the other would misattribute
    /// entropies, so the batch is rejected up front.
    LabelCollision(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::LabelCollision(label) => write!(
                f,
                "Colliding result label '{label}': two column combinations join to the same name"
            ),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ScanError {}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<polars::error::PolarsError> for ScanError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<serde_json::Error> for ScanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;
