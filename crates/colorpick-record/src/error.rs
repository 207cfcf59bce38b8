//! Error types for colorpick-record

use thiserror::Error;

/// Errors that can occur during record operations
#[derive(Debug, Error)]
pub enum RecordError {
    /// The store already holds the maximum number of records
    #[error("record store is full: at most {capacity} records")]
    CapacityExceeded { capacity: usize },

    /// Auto-pick needs a record at position 0
    #[error("no base point: record one point before auto-picking")]
    NoBasePoint,

    /// Slot key is not a positive integer
    #[error("invalid slot key: {0:?}")]
    InvalidSlotKey(String),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// JSON export failed
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;
