//! Error types for blockfill.

use thiserror::Error;

/// Result type alias for blockfill operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during packing.
#[derive(Debug, Error)]
pub enum Error {
    /// A rectangle with a non-positive or non-finite dimension.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A container with a non-positive or non-finite dimension.
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns true if the error was caused by caller-supplied input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidGeometry(_) | Error::InvalidBoundary(_))
    }
}
