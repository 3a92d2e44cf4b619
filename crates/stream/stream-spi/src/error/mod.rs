//! Error types for stream generation.
//!
//! This module contains error types and the Result alias.

mod stream_error;

pub use stream_error::{Result, StreamError};
