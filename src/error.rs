//! Error types for siteinsight

use thiserror::Error;

/// Errors raised while turning report data into scored records.
///
/// Scoring, ranking and narrative generation never fail; everything here is a
/// contract violation by whoever produced the input.
#[derive(Error, Debug)]
pub enum Error {
    /// A report row is missing a field or carries an unusable value
    #[error("row {row}: invalid {field}: {reason}")]
    InvalidRow {
        row: usize,
        field: &'static str,
        reason: String,
    },

    /// A record was constructed with an out-of-range value
    #[error("invalid {field}: {reason}")]
    InvalidRecord { field: &'static str, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Attach a row index to a record-level error
    pub fn at_row(self, row: usize) -> Self {
        match self {
            Error::InvalidRecord { field, reason } => Error::InvalidRow { row, field, reason },
            other => other,
        }
    }
}

/// Result type alias for siteinsight
pub type Result<T> = std::result::Result<T, Error>;
