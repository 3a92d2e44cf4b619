//! Cut tree trait definition.

use crate::error::TreeResult;

/// Streaming random-cut tree capability.
///
/// Any balanced streaming outlier structure can provide this; the forest
/// ensemble only drives point lifecycle and scoring through it. Points are
/// keyed by their arrival index, which callers must keep unique.
pub trait CutTree: Send + Sync {
    /// Add a point under a unique identifier.
    fn insert(&mut self, value: f64, id: u64) -> TreeResult<()>;

    /// Remove a point by identifier.
    fn forget(&mut self, id: u64) -> TreeResult<()>;

    /// Current retained point count.
    fn size(&self) -> usize;

    /// Identifier of the longest-retained point still in the tree.
    fn oldest_id(&self) -> TreeResult<u64>;

    /// Anomaly contribution of the named point relative to the tree's
    /// current structure. Higher means more anomalous.
    fn codisplacement(&self, id: u64) -> TreeResult<f64>;
}
