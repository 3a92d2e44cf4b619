//! Cut tree error types.

use thiserror::Error;

/// Failures raised by a cut-tree provider.
///
/// Any of these surfacing during ensemble processing indicates an
/// invariant violation: non-unique point ids or corrupted ensemble state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Duplicate point id: {0}")]
    DuplicateId(u64),

    #[error("Point id not found: {0}")]
    NotFound(u64),

    #[error("Tree holds no points")]
    Empty,
}

/// Result type for cut-tree operations.
pub type TreeResult<T> = std::result::Result<T, TreeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_display() {
        let error = TreeError::DuplicateId(17);
        assert_eq!(error.to_string(), "Duplicate point id: 17");
    }

    #[test]
    fn test_not_found_display() {
        let error = TreeError::NotFound(0);
        assert_eq!(error.to_string(), "Point id not found: 0");
    }

    #[test]
    fn test_empty_display() {
        let error = TreeError::Empty;
        assert_eq!(error.to_string(), "Tree holds no points");
    }

    #[test]
    fn test_error_is_debug() {
        let debug_str = format!("{:?}", TreeError::DuplicateId(3));
        assert!(debug_str.contains("DuplicateId"));
        assert!(debug_str.contains("3"));
    }

    #[test]
    fn test_tree_result_err() {
        let result: TreeResult<f64> = Err(TreeError::Empty);
        assert!(matches!(result, Err(TreeError::Empty)));
    }
}
