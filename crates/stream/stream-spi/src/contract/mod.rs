//! Contract definitions for stream sources.
//!
//! This module contains trait definitions that providers must implement.

mod stream_source;

pub use stream_source::StreamSource;
