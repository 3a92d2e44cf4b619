//! Stream Generation API
//!
//! Configuration types for synthetic stream generation.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use stream_spi::{Result, Sample, StreamError, StreamSource};

/// Synthetic stream configuration.
///
/// The generated stream is a linear trend plus a sinusoidal seasonal
/// component plus Gaussian noise, with occasional uniform spikes injected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Total number of values to produce (default: 1000).
    pub len: usize,
    /// Constant offset of the stream (default: 10.0).
    pub base_level: f64,
    /// Linear drift per stream position (default: 0.005).
    pub trend_slope: f64,
    /// Peak amplitude of the seasonal component (default: 5.0).
    pub seasonal_amplitude: f64,
    /// Seasonal period in stream positions (default: 100.0).
    pub seasonal_period: f64,
    /// Standard deviation of the Gaussian noise (default: 1.0).
    pub noise_level: f64,
    /// Per-value probability of an injected spike (default: 0.02).
    pub spike_probability: f64,
    /// Lower bound of the uniform spike magnitude (default: 20.0).
    pub spike_min: f64,
    /// Upper bound of the uniform spike magnitude (default: 50.0).
    pub spike_max: f64,
    /// Seed for the generator; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            len: 1000,
            base_level: 10.0,
            trend_slope: 0.005,
            seasonal_amplitude: 5.0,
            seasonal_period: 100.0,
            noise_level: 1.0,
            spike_probability: 0.02,
            spike_min: 20.0,
            spike_max: 50.0,
            seed: None,
        }
    }
}

impl SyntheticConfig {
    /// Create a configuration for a stream of `len` values.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    /// Set the generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Disable noise and spikes, leaving the deterministic trend and
    /// seasonal components.
    pub fn without_noise(mut self) -> Self {
        self.noise_level = 0.0;
        self.spike_probability = 0.0;
        self
    }
}
