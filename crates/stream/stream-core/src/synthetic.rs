//! Synthetic seasonal stream generator.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use stream_api::SyntheticConfig;
use stream_spi::{Result, Sample, StreamError, StreamSource};

/// Seasonally-varying stream with trend, Gaussian noise, and injected spikes.
///
/// Each value at position `i` is
/// `base_level + trend_slope * i + seasonal_amplitude * sin(2π i / seasonal_period)`
/// plus Gaussian noise, and with probability `spike_probability` a uniform
/// spike in `[spike_min, spike_max]`. Identical seeds produce identical
/// streams.
pub struct SyntheticStream {
    config: SyntheticConfig,
    position: u64,
    rng: StdRng,
}

impl SyntheticStream {
    /// Create a generator from configuration.
    ///
    /// Fails when `len` is zero, `seasonal_period` is not positive,
    /// `noise_level` is negative, `spike_probability` is outside `[0, 1]`,
    /// or the spike bounds are inverted.
    pub fn new(config: SyntheticConfig) -> Result<Self> {
        if config.len == 0 {
            return Err(invalid("len", "must be positive"));
        }
        if !(config.seasonal_period > 0.0) {
            return Err(invalid("seasonal_period", "must be positive"));
        }
        if !(config.noise_level >= 0.0) {
            return Err(invalid("noise_level", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&config.spike_probability) {
            return Err(invalid("spike_probability", "must be in range [0, 1]"));
        }
        if config.spike_min > config.spike_max {
            return Err(invalid("spike_min", "must not exceed spike_max"));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            position: 0,
            rng,
        })
    }

    /// Number of values this stream will produce in total.
    pub fn len(&self) -> usize {
        self.config.len
    }

    /// Whether the stream produces no values. Never true for a validated
    /// configuration.
    pub fn is_empty(&self) -> bool {
        self.config.len == 0
    }

    /// Drain the remaining stream into a vector of raw values.
    pub fn generate(mut self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.config.len);
        while let Some(value) = self.next_value() {
            values.push(value);
        }
        values
    }

    /// Drain the remaining stream into indexed samples.
    pub fn samples(mut self) -> Vec<Sample> {
        let mut samples = Vec::with_capacity(self.config.len);
        loop {
            let index = self.position;
            match self.next_value() {
                Some(value) => samples.push(Sample::new(index, value)),
                None => break,
            }
        }
        samples
    }

    // Box-Muller transform over two uniform draws.
    fn next_gaussian(&mut self) -> f64 {
        let u1: f64 = self.rng.gen::<f64>().max(f64::MIN_POSITIVE);
        let u2: f64 = self.rng.gen();
        (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
    }
}

impl StreamSource for SyntheticStream {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn next_value(&mut self) -> Option<f64> {
        if self.position >= self.config.len as u64 {
            return None;
        }
        let i = self.position as f64;
        let base = self.config.base_level
            + self.config.trend_slope * i
            + self.config.seasonal_amplitude * (TAU * i / self.config.seasonal_period).sin();
        let noise = self.config.noise_level * self.next_gaussian();
        let mut value = base + noise;
        if self.rng.gen::<f64>() < self.config.spike_probability {
            value += self.rng.gen_range(self.config.spike_min..=self.config.spike_max);
        }
        self.position += 1;
        Some(value)
    }
}

impl Iterator for SyntheticStream {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.next_value()
    }
}

fn invalid(name: &str, reason: &str) -> StreamError {
    StreamError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
