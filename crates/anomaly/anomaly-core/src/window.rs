//! Sliding-window z-score detector.

use std::collections::VecDeque;

use anomaly_api::WindowConfig;
use anomaly_spi::{AnomalyError, Decision, Outcome, Result, StreamScorer};

/// Sliding-window mean/standard-deviation detector.
///
/// Classifies each value against the `window_size` values immediately
/// preceding it; the value itself is excluded from its own baseline.
/// The first `window_size` values are warm-up and are never flagged.
#[derive(Debug, Clone)]
pub struct WindowStatDetector {
    window_size: usize,
    threshold: f64,
    window: VecDeque<f64>,
}

impl WindowStatDetector {
    /// Create a detector with the given window size and z-score threshold.
    pub fn new(window_size: usize, threshold: f64) -> Result<Self> {
        if window_size == 0 {
            return Err(AnomalyError::invalid_parameter(
                "window_size",
                "must be positive",
            ));
        }
        if !(threshold > 0.0) {
            return Err(AnomalyError::invalid_parameter(
                "threshold",
                "must be positive",
            ));
        }
        Ok(Self {
            window_size,
            threshold,
            window: VecDeque::with_capacity(window_size + 1),
        })
    }

    /// Create from configuration.
    pub fn from_config(config: &WindowConfig) -> Result<Self> {
        Self::new(config.window_size, config.threshold)
    }

    /// Classify the next stream value, then absorb it into the window.
    ///
    /// Must be called exactly once per stream position, in arrival order.
    pub fn observe(&mut self, value: f64) -> Decision {
        if self.window.len() < self.window_size {
            self.window.push_back(value);
            return Decision::Warmup;
        }
        let decision = self.classify(value);
        self.window.push_back(value);
        if self.window.len() > self.window_size {
            self.window.pop_front();
        }
        decision
    }

    /// Number of values currently in the trailing window.
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    fn classify(&self, value: f64) -> Decision {
        let n = self.window.len() as f64;
        let mean = self.window.iter().sum::<f64>() / n;
        let variance = self.window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();
        // A perfectly flat window cannot statistically support an anomaly
        // claim, so it classifies everything as normal.
        if std_dev == 0.0 {
            return Decision::Normal;
        }
        if (value - mean).abs() > self.threshold * std_dev {
            Decision::Anomaly
        } else {
            Decision::Normal
        }
    }
}

impl StreamScorer for WindowStatDetector {
    fn push(&mut self, value: f64) -> Result<Outcome> {
        Ok(Outcome::Decision(self.observe(value)))
    }

    fn name(&self) -> &str {
        "window-stat"
    }
}
