//! Indicator table error types
//!
//! Every variant is fatal at load time: a table that fails to load is never
//! partially served.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the indicator table
#[derive(Error, Debug)]
pub enum TableError {
    /// The source file could not be opened or read
    #[error("Failed to read indicator table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source is not well-formed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// One or more required columns are absent from the header
    #[error("Schema mismatch: missing column(s) {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    /// A cell holds a value that cannot be used
    #[error("Invalid value {value:?} in column {column} on line {line}")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
    },

    /// The same (Country, Year) pair appears twice
    #[error("Duplicate observation for {country} {year} on line {line}")]
    DuplicateObservation {
        country: String,
        year: i32,
        line: u64,
    },
}

/// Result type alias for table operations
pub type TableResult<T> = Result<T, TableError>;
