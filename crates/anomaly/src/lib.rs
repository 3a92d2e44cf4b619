//! # streamwatch-anomaly
//!
//! Streaming anomaly detection for streamwatch.
//!
//! This crate is the single entry point to the anomaly vertical:
//! - `StreamScorer`, `CutTree`, and `PointSink` traits, models, and errors
//!   from SPI
//! - Configuration types from API
//! - Detectors (`WindowStatDetector`, `ForestEnsembleDetector`), the
//!   `RandomCutTree` provider, monitoring, sinks, and alerting from Core

// Re-export everything from SPI
pub use anomaly_spi::*;

// Re-export everything from API
pub use anomaly_api::*;

// Re-export everything from Core
pub use anomaly_core::*;
