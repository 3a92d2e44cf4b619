//! Anomaly Detection API
//!
//! Configuration types for the streaming detectors.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{
    Alert, AlertSeverity, AnomalyError, CutTree, Decision, Outcome, PointSink, Result,
    ScoredPoint, StreamScorer, TreeError, TreeResult,
};

// ============================================================================
// Detector Configuration
// ============================================================================

/// Sliding-window z-score detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Size of the trailing baseline window (default: 100).
    pub window_size: usize,
    /// Z-score cutoff in standard deviations (default: 3.0).
    pub threshold: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_size: 100,
            threshold: 3.0,
        }
    }
}

impl WindowConfig {
    pub fn new(window_size: usize, threshold: f64) -> Self {
        Self {
            window_size,
            threshold,
        }
    }
}

/// Random-cut forest ensemble configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestConfig {
    /// Number of independent trees in the ensemble (default: 40).
    pub num_trees: usize,
    /// Retained-point bound per tree (default: 256).
    pub tree_capacity: usize,
    /// Seed for per-tree randomness; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            num_trees: 40,
            tree_capacity: 256,
            seed: None,
        }
    }
}

impl ForestConfig {
    pub fn new(num_trees: usize, tree_capacity: usize) -> Self {
        Self {
            num_trees,
            tree_capacity,
            seed: None,
        }
    }

    /// Set the ensemble seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
