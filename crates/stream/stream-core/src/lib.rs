//! Stream Generation Core
//!
//! Implementations for synthetic stream production.

mod synthetic;

pub use synthetic::SyntheticStream;
