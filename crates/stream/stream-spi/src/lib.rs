//! Stream Source Service Provider Interface
//!
//! Defines traits and types for producing numeric data streams.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::StreamSource;
pub use error::{Result, StreamError};
pub use model::Sample;
