//! Per-point decision types.

use serde::{Deserialize, Serialize};

/// Ternary classification of a single stream value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Not enough history yet to support a decision. Early positions are
    /// never flagged.
    Warmup,
    Normal,
    Anomaly,
}

impl Decision {
    /// Whether this decision flags the point.
    pub fn is_anomaly(&self) -> bool {
        matches!(self, Decision::Anomaly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_anomaly_flags() {
        assert!(!Decision::Warmup.is_anomaly());
        assert!(!Decision::Normal.is_anomaly());
        assert!(Decision::Anomaly.is_anomaly());
    }
}
