//! Error types for the criticality scorer.
//!
//! Only two kinds of failure are fatal: the table file cannot be read or
//! written, and a required column is missing from the header. Cell-level
//! data quality problems are never errors; the transform coerces them to 0.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridcritError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown encoding label '{0}'")]
    UnknownEncoding(String),

    #[error("delimiter must be a single ASCII character, got '{0}'")]
    InvalidDelimiter(char),

    #[error("malformed table")]
    Csv(#[from] csv::Error),

    #[error("required column '{0}' not found in table header")]
    MissingColumn(String),
}
