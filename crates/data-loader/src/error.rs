//! Error types for the data-loader crate.
//!
//! Every failure here is fatal at startup: the binary reports it and exits
//! before any prompt is shown.

use thiserror::Error;

/// Errors that can occur while loading and validating the movie dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected the file (bad quoting, ragged rows, bad UTF-8)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks one of the required columns
    #[error("Missing required column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    /// Line in data file couldn't be parsed
    ///
    /// Line numbers are 1-based and count the header row.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// A field parsed fine but its value is outside the accepted domain
    #[error("Invalid value for {field} at line {line}: {value}")]
    InvalidValue {
        field: String,
        value: String,
        line: u64,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
