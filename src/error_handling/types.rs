//! Error type definitions.
//!
//! Invalid domain input is not an error: it is reported through
//! `Domain::is_valid()`. These types cover the operational failures around the
//! rater (logger setup, reading input, writing reports).

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for reading domains and writing reports.
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file could not be opened or read.
    #[error("Failed to read domains from {path}: {source}")]
    FileReadError {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("Failed to read domains from stdin: {0}")]
    StdinReadError(#[source] std::io::Error),

    /// A report could not be written to the output.
    #[error("Failed to write report: {0}")]
    OutputError(#[from] std::io::Error),

    /// A report could not be serialized to JSON.
    #[error("Failed to serialize report: {0}")]
    SerializeError(#[from] serde_json::Error),
}
