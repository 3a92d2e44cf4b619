//! Random-cut forest ensemble detector.

use anomaly_api::ForestConfig;
use anomaly_spi::{AnomalyError, CutTree, Outcome, Result, StreamScorer};

use super::tree::RandomCutTree;

/// Ensemble of independent streaming cut trees.
///
/// Every observation is inserted into every tree, in creation order;
/// a tree over capacity first evicts its oldest retained point. The
/// reported score is the mean co-displacement across trees.
pub struct ForestEnsembleDetector {
    trees: Vec<Box<dyn CutTree>>,
    tree_capacity: usize,
    next_id: u64,
}

impl ForestEnsembleDetector {
    /// Build an ensemble backed by seeded [`RandomCutTree`]s.
    ///
    /// Each tree derives its own seed from the configured seed and its
    /// position, so identical configurations score identically.
    pub fn new(config: &ForestConfig) -> Result<Self> {
        let trees = (0..config.num_trees)
            .map(|i| {
                let seed = config.seed.map(|s| s.wrapping_add(i as u64));
                Box::new(RandomCutTree::new(seed)) as Box<dyn CutTree>
            })
            .collect();
        Self::with_trees(trees, config.tree_capacity)
    }

    /// Build an ensemble over caller-supplied trees.
    ///
    /// Ensemble order is the order of `trees`; it stays fixed for the
    /// lifetime of the detector.
    pub fn with_trees(trees: Vec<Box<dyn CutTree>>, tree_capacity: usize) -> Result<Self> {
        if trees.is_empty() {
            return Err(AnomalyError::invalid_parameter(
                "num_trees",
                "must be positive",
            ));
        }
        if tree_capacity == 0 {
            return Err(AnomalyError::invalid_parameter(
                "tree_capacity",
                "must be positive",
            ));
        }
        Ok(Self {
            trees,
            tree_capacity,
            next_id: 0,
        })
    }

    /// Score one point under a unique, monotonically increasing id.
    ///
    /// The eviction check runs before insertion, so a tree may transiently
    /// hold `tree_capacity + 1` points between observations. Any tree
    /// failure leaves the ensemble partially updated and must propagate;
    /// continuing would corrupt every subsequent score.
    pub fn observe(&mut self, value: f64, point_id: u64) -> Result<f64> {
        let mut total = 0.0;
        for tree in &mut self.trees {
            if tree.size() > self.tree_capacity {
                let oldest = tree.oldest_id()?;
                tree.forget(oldest)?;
            }
            tree.insert(value, point_id)?;
            total += tree.codisplacement(point_id)?;
        }
        Ok(total / self.trees.len() as f64)
    }

    /// Ensemble width.
    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Per-tree retained-point bound.
    pub fn tree_capacity(&self) -> usize {
        self.tree_capacity
    }

    /// Retained point counts, one per tree in ensemble order.
    pub fn tree_sizes(&self) -> Vec<usize> {
        self.trees.iter().map(|tree| tree.size()).collect()
    }
}

impl StreamScorer for ForestEnsembleDetector {
    fn push(&mut self, value: f64) -> Result<Outcome> {
        let id = self.next_id;
        self.next_id += 1;
        Ok(Outcome::Score(self.observe(value, id)?))
    }

    fn name(&self) -> &str {
        "forest-ensemble"
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use anomaly_spi::{TreeError, TreeResult};

    use super::*;

    /// Deterministic stand-in for a cut tree: co-displacement is the
    /// distance between the inserted value and the mean of the other
    /// retained points.
    struct StubTree {
        points: VecDeque<(u64, f64)>,
    }

    impl StubTree {
        fn new() -> Self {
            Self {
                points: VecDeque::new(),
            }
        }
    }

    impl CutTree for StubTree {
        fn insert(&mut self, value: f64, id: u64) -> TreeResult<()> {
            if self.points.iter().any(|(existing, _)| *existing == id) {
                return Err(TreeError::DuplicateId(id));
            }
            self.points.push_back((id, value));
            Ok(())
        }

        fn forget(&mut self, id: u64) -> TreeResult<()> {
            let position = self
                .points
                .iter()
                .position(|(existing, _)| *existing == id)
                .ok_or(TreeError::NotFound(id))?;
            self.points.remove(position);
            Ok(())
        }

        fn size(&self) -> usize {
            self.points.len()
        }

        fn oldest_id(&self) -> TreeResult<u64> {
            self.points.front().map(|(id, _)| *id).ok_or(TreeError::Empty)
        }

        fn codisplacement(&self, id: u64) -> TreeResult<f64> {
            let value = self
                .points
                .iter()
                .find(|(existing, _)| *existing == id)
                .map(|(_, value)| *value)
                .ok_or(TreeError::NotFound(id))?;
            let others: Vec<f64> = self
                .points
                .iter()
                .filter(|(existing, _)| *existing != id)
                .map(|(_, value)| *value)
                .collect();
            if others.is_empty() {
                return Ok(0.0);
            }
            let mean = others.iter().sum::<f64>() / others.len() as f64;
            Ok((value - mean).abs())
        }
    }

    fn stub_ensemble(num_trees: usize, tree_capacity: usize) -> ForestEnsembleDetector {
        let trees = (0..num_trees)
            .map(|_| Box::new(StubTree::new()) as Box<dyn CutTree>)
            .collect();
        ForestEnsembleDetector::with_trees(trees, tree_capacity).unwrap()
    }

    #[test]
    fn test_empty_ensemble_rejected() {
        let result = ForestEnsembleDetector::with_trees(Vec::new(), 8);
        assert!(matches!(
            result,
            Err(AnomalyError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let trees = vec![Box::new(StubTree::new()) as Box<dyn CutTree>];
        assert!(ForestEnsembleDetector::with_trees(trees, 0).is_err());
    }

    #[test]
    fn test_zero_trees_config_rejected() {
        let config = ForestConfig::new(0, 16);
        assert!(ForestEnsembleDetector::new(&config).is_err());
    }

    #[test]
    fn test_score_reflects_only_retained_points() {
        // With capacity 2, the score for the final spike compares it to
        // the at-most-2 points still retained, not the full history.
        let mut ensemble = stub_ensemble(1, 2);
        let stream = [1.0, 1.0, 1.0, 1.0, 100.0];
        let scores: Vec<f64> = stream
            .iter()
            .enumerate()
            .map(|(i, &v)| ensemble.observe(v, i as u64).unwrap())
            .collect();
        assert_eq!(scores, vec![0.0, 0.0, 0.0, 0.0, 99.0]);
    }

    #[test]
    fn test_capacity_invariant() {
        let mut ensemble = stub_ensemble(3, 4);
        for i in 0..20 {
            ensemble.observe(i as f64, i as u64).unwrap();
            for size in ensemble.tree_sizes() {
                assert!(size <= 5, "tree exceeded capacity + 1: {}", size);
            }
            if i < 4 {
                // Exactly i + 1 points retained until capacity is reached.
                assert!(ensemble.tree_sizes().iter().all(|&s| s == i + 1));
            }
        }
    }

    #[test]
    fn test_score_is_mean_over_trees() {
        let mut ensemble = stub_ensemble(4, 8);
        ensemble.observe(2.0, 0).unwrap();
        // All stub trees are identical, so the mean equals any single
        // tree's contribution.
        let score = ensemble.observe(6.0, 1).unwrap();
        assert_eq!(score, 4.0);
    }

    #[test]
    fn test_duplicate_id_is_fatal() {
        let mut ensemble = stub_ensemble(2, 8);
        ensemble.observe(1.0, 7).unwrap();
        let result = ensemble.observe(2.0, 7);
        assert!(matches!(
            result,
            Err(AnomalyError::EnsembleInvariant(TreeError::DuplicateId(7)))
        ));
    }

    #[test]
    fn test_scorer_assigns_sequential_ids() {
        let mut ensemble = stub_ensemble(1, 8);
        for value in [5.0, 5.0, 5.0] {
            let outcome = ensemble.push(value).unwrap();
            assert!(matches!(outcome, Outcome::Score(_)));
        }
        assert_eq!(ensemble.tree_sizes(), vec![3]);
        assert_eq!(ensemble.name(), "forest-ensemble");
    }
}
