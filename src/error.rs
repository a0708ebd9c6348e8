//! Error types for data loading and view configuration.
//!
//! Data-shape errors (missing columns, malformed rows) abort the triggering
//! load with no partial result. Empty query results such as a window with
//! no samples are valid states, not errors, and never appear here.

/// Result type for loading and configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for loading and configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required CSV columns are absent. Fatal to the load; nothing is
    /// partially applied.
    #[error("The file must contain these columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A row's timestamp could not be parsed.
    #[error("Row {row}: unparseable timestamp {value:?}")]
    MalformedTimestamp { row: usize, value: String },

    /// A row's activity level could not be parsed as a number.
    #[error("Row {row}: unparseable activity level {value:?}")]
    MalformedActivity { row: usize, value: String },

    /// A requested high-resolution window is out of range, inverted, or
    /// wider than the 4-hour cap. The current view must be left untouched.
    #[error("Invalid time window: {reason}")]
    InvalidWindow { reason: String },

    /// CSV-level read or parse failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing-columns error from the list of absent column names.
    pub fn missing_columns(columns: Vec<String>) -> Self {
        Self::MissingColumns { columns }
    }

    /// Create an invalid-window error with a human-readable reason.
    pub fn invalid_window(reason: impl Into<String>) -> Self {
        Self::InvalidWindow {
            reason: reason.into(),
        }
    }

    /// Create a malformed-timestamp error for a 1-based file row.
    pub fn malformed_timestamp(row: usize, value: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            row,
            value: value.into(),
        }
    }

    /// Create a malformed-activity error for a 1-based file row.
    pub fn malformed_activity(row: usize, value: impl Into<String>) -> Self {
        Self::MalformedActivity {
            row,
            value: value.into(),
        }
    }
}
