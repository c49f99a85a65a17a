//! Error types for distribution computation
//!
//! Provides a unified error type for all empirical-dist crates.

use thiserror::Error;

/// Unified error type for distribution pipelines
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or missing configuration, detected before any data is read
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (unreadable input path, failed read)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record yields fewer whitespace-separated fields than the selector requires
    #[error("Malformed record on line {line}: needed {needed} fields, found {found}")]
    MalformedRecord {
        line: usize,
        needed: usize,
        found: usize,
    },

    /// A selected token does not parse as a number
    #[error("Invalid number on line {line}: {token:?}")]
    InvalidNumber { line: usize, token: String },

    /// Row selector points past the end of the input
    #[error("Row index out of range: requested row {requested}, input has {available} lines")]
    RowIndexOutOfRange { requested: usize, available: usize },

    /// Value below the lower bin bound
    #[error("Value {value} is below the lower bin bound {lower}")]
    ValueBelowRange { value: f64, lower: f64 },

    /// Value at or above the upper bin bound
    #[error("Value {value} is at or above the upper bin bound {upper}")]
    ValueAboveRange { value: f64, upper: f64 },

    /// No surviving values to normalize over
    #[error("Empty distribution: no values survived extraction and filtering")]
    EmptyDistribution,

    /// Logarithmic binning over data with no strictly positive value
    #[error("Invalid log domain: maximum observed value {max} is not strictly positive")]
    InvalidLogDomain { max: f64 },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create a configuration error from any message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an error for a record with too few fields (1-based line number)
    pub fn malformed_record(line: usize, needed: usize, found: usize) -> Self {
        Self::MalformedRecord {
            line,
            needed,
            found,
        }
    }

    /// Create an error for an unparsable token (1-based line number)
    pub fn invalid_number(line: usize, token: &str) -> Self {
        Self::InvalidNumber {
            line,
            token: token.to_string(),
        }
    }
}
