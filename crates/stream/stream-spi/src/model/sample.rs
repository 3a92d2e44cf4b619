//! Stream sample types.

use serde::{Deserialize, Serialize};

/// One stream value paired with its arrival index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// 0-based arrival order of the value.
    pub index: u64,
    pub value: f64,
}

impl Sample {
    /// Create a new sample.
    pub fn new(index: u64, value: f64) -> Self {
        Self { index, value }
    }
}
