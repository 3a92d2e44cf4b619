//! Anomaly Detection Core
//!
//! Implementations for streaming detection, monitoring, sinks, and
//! alerting.

mod alerting;
mod forest;
mod monitoring;
mod sinks;
mod tree;
mod window;

pub use alerting::*;
pub use forest::*;
pub use monitoring::*;
pub use sinks::*;
pub use tree::*;
pub use window::*;
