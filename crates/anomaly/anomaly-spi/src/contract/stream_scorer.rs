//! Stream scorer trait definition.

use crate::error::Result;
use crate::model::Outcome;

/// Streaming scorer trait.
///
/// Implementations consume one value per stream position, strictly in
/// arrival order, and produce exactly one outcome per value. A scorer
/// holds all of its own state; concurrent callers are not supported.
pub trait StreamScorer: Send + Sync {
    /// Push the next stream value and produce its outcome.
    fn push(&mut self, value: f64) -> Result<Outcome>;

    /// Scorer name for reporting.
    fn name(&self) -> &str;
}
