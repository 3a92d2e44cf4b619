//! Stream monitoring control loop.

use anomaly_spi::{PointSink, Result, ScoredPoint, StreamScorer};

/// Single-pass control loop over a value stream.
///
/// Pulls values in arrival order, scores each exactly once, and forwards
/// every scored point to the sink: one point per input, in input order,
/// no drops, no reordering. The first invariant violation aborts the run.
pub struct StreamMonitor<S: StreamScorer> {
    scorer: S,
    position: u64,
}

impl<S: StreamScorer> StreamMonitor<S> {
    /// Create a monitor around the given scorer.
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            position: 0,
        }
    }

    /// Drain `values`, recording one scored point per input.
    ///
    /// Positions continue across calls, so a stream may be fed in chunks.
    /// Returns the number of points processed by this call.
    pub fn run<I, K>(&mut self, values: I, sink: &mut K) -> Result<usize>
    where
        I: IntoIterator<Item = f64>,
        K: PointSink + ?Sized,
    {
        let mut processed = 0;
        for value in values {
            let outcome = self.scorer.push(value)?;
            let point = ScoredPoint::new(self.position, value, outcome);
            self.position += 1;
            sink.record(&point);
            processed += 1;
        }
        log::debug!("{} scored {} points", self.scorer.name(), processed);
        Ok(processed)
    }

    /// Get the underlying scorer.
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Get mutable reference to the scorer.
    pub fn scorer_mut(&mut self) -> &mut S {
        &mut self.scorer
    }
}
