//! Contract definitions for anomaly detection.
//!
//! This module contains trait definitions that providers must implement.

mod cut_tree;
mod point_sink;
mod stream_scorer;

pub use cut_tree::CutTree;
pub use point_sink::PointSink;
pub use stream_scorer::StreamScorer;
