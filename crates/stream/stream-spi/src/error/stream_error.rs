//! Stream generation error types.

use thiserror::Error;

/// Stream generation errors.
#[derive(Debug, Clone, Error)]
pub enum StreamError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;
