//! Point sink implementations.

use anomaly_spi::{Outcome, PointSink, ScoredPoint};

/// Collects every scored point in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    points: Vec<ScoredPoint>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Points recorded so far, in stream order.
    pub fn points(&self) -> &[ScoredPoint] {
        &self.points
    }

    /// Consume the sink, yielding the recorded points.
    pub fn into_points(self) -> Vec<ScoredPoint> {
        self.points
    }
}

impl PointSink for MemorySink {
    fn record(&mut self, point: &ScoredPoint) {
        self.points.push(*point);
    }
}

/// Prints one line per scored point.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl PointSink for ConsoleSink {
    fn record(&mut self, point: &ScoredPoint) {
        match point.outcome {
            Outcome::Decision(decision) => {
                println!("{:>6}  {:>12.4}  {:?}", point.index, point.value, decision);
            }
            Outcome::Score(score) => {
                println!("{:>6}  {:>12.4}  {:.4}", point.index, point.value, score);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use anomaly_spi::Decision;

    use super::*;

    #[test]
    fn test_memory_sink_preserves_order() {
        let mut sink = MemorySink::new();
        for i in 0..5 {
            sink.record(&ScoredPoint::new(
                i,
                i as f64,
                Outcome::Decision(Decision::Normal),
            ));
        }
        let indices: Vec<u64> = sink.points().iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(sink.into_points().len(), 5);
    }
}
