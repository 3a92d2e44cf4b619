//! Anomaly detection error types.

use thiserror::Error;

use super::tree_error::TreeError;

/// Anomaly detection errors.
#[derive(Debug, Error)]
pub enum AnomalyError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A cut-tree operation failed mid-update. The ensemble is no longer
    /// consistent across trees, so the run must abort rather than continue
    /// with corrupted scores.
    #[error("Ensemble invariant violated: {0}")]
    EnsembleInvariant(#[from] TreeError),
}

impl AnomalyError {
    /// Build an invalid-parameter error.
    pub fn invalid_parameter(name: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;
