//! Error types for colorpick-color

use thiserror::Error;

/// Errors that can occur during color analysis operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Unknown color display format name
    #[error("unknown color format: {0}")]
    UnknownFormat(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
