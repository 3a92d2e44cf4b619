//! Point sink trait definition.

use crate::model::ScoredPoint;

/// Visualization boundary: consumes scored points in stream order.
///
/// Sinks have no influence on detection correctness; the control loop
/// delivers one point per input value, in input order, with no drops.
pub trait PointSink: Send + Sync {
    /// Record one scored point.
    fn record(&mut self, point: &ScoredPoint);
}
