//! # streamwatch-stream
//!
//! Synthetic stream generation for streamwatch.
//!
//! This crate is the single entry point to the stream vertical:
//! - `StreamSource` trait, `Sample` model, and errors from SPI
//! - `SyntheticConfig` from API
//! - `SyntheticStream` generator from Core

// Re-export everything from SPI
pub use stream_spi::*;

// Re-export everything from API
pub use stream_api::*;

// Re-export everything from Core
pub use stream_core::*;
