//! Unified classification-or-score outcome.

use serde::{Deserialize, Serialize};

use super::decision::Decision;

/// Result of scoring one stream value.
///
/// The window detector produces a ternary decision; the forest ensemble
/// produces a continuous score with no built-in threshold. Classification
/// of a score is left to a caller-supplied cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Decision(Decision),
    Score(f64),
}

impl Outcome {
    /// The decision, if this outcome carries one.
    pub fn decision(&self) -> Option<Decision> {
        match self {
            Outcome::Decision(decision) => Some(*decision),
            Outcome::Score(_) => None,
        }
    }

    /// The continuous score, if this outcome carries one.
    pub fn score(&self) -> Option<f64> {
        match self {
            Outcome::Decision(_) => None,
            Outcome::Score(score) => Some(*score),
        }
    }

    /// Whether this outcome flags the point, using `cutoff` to classify
    /// score outcomes.
    pub fn is_anomalous(&self, cutoff: f64) -> bool {
        match self {
            Outcome::Decision(decision) => decision.is_anomaly(),
            Outcome::Score(score) => *score > cutoff,
        }
    }
}
