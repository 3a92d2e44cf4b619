//! Scored point types.

use serde::{Deserialize, Serialize};

use super::outcome::Outcome;

/// A stream value paired with its detection outcome.
///
/// This is the record delivered to sinks: one per input value, in input
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredPoint {
    /// 0-based arrival index of the value.
    pub index: u64,
    pub value: f64,
    pub outcome: Outcome,
}

impl ScoredPoint {
    /// Create a new scored point.
    pub fn new(index: u64, value: f64, outcome: Outcome) -> Self {
        Self {
            index,
            value,
            outcome,
        }
    }
}
