//! Error types for respwire
//!
//! Provides a unified error type for all writer operations.

use std::io;

use thiserror::Error;

/// Result type alias using WireError
pub type Result<T> = std::result::Result<T, WireError>;

/// Unified error type for respwire operations
#[derive(Debug, Error)]
pub enum WireError {
    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // -------------------------------------------------------------------------
    // Sink Errors
    // -------------------------------------------------------------------------
    /// The sink rejected a forwarded write or flush. The source error is kept as-is.
    #[error("Sink write failed: {0}")]
    SinkWriteFailed(#[from] io::Error),
}

impl WireError {
    /// Kind of the underlying sink failure, if this is one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            WireError::SinkWriteFailed(e) => Some(e.kind()),
            WireError::InvalidConfiguration(_) => None,
        }
    }
}

impl From<WireError> for io::Error {
    fn from(err: WireError) -> Self {
        match err {
            WireError::SinkWriteFailed(e) => e,
            WireError::InvalidConfiguration(msg) => io::Error::new(io::ErrorKind::InvalidInput, msg),
        }
    }
}
