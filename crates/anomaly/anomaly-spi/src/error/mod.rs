//! Error types for anomaly detection.
//!
//! This module contains error types and the Result aliases.

mod anomaly_error;
mod tree_error;

pub use anomaly_error::{AnomalyError, Result};
pub use tree_error::{TreeError, TreeResult};
