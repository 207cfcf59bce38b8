//! Error types for sessions and configuration

use thiserror::Error;

/// Errors that can occur while driving a picking session
#[derive(Debug, Error)]
pub enum SessionError {
    /// The operation needs an active image
    #[error("no active image")]
    NoImage,

    /// The operation needs a selected area
    #[error("no area selected")]
    NoArea,

    /// A requested coordinate lies outside the active image
    #[error("point ({x}, {y}) lies outside the {width}x{height} image")]
    OutOfImage {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// Region analysis error
    #[error("region error: {0}")]
    Region(#[from] colorpick_region::RegionError),

    /// Record store error
    #[error("record error: {0}")]
    Record(#[from] colorpick_record::RecordError),

    /// Image I/O error
    #[error("io error: {0}")]
    Io(#[from] colorpick_io::IoError),

    /// Configuration (de)serialization error
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
