use thiserror::Error;

/// Structural input errors. Disconnected or identical endpoints are not errors,
/// they have their own [`crate::Bottleneck`] answers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BottleneckError {
    #[error("node {node} is outside the valid range 1..={n}")]
    NodeOutOfRange { node: usize, n: usize },
    #[error("edge #{index} ({u}, {v}) references a node outside 1..={n}")]
    EdgeOutOfRange {
        index: usize,
        u: usize,
        v: usize,
        n: usize,
    },
}

/// Checks that `u` is a valid node id for a graph on `n` nodes.
pub(crate) fn check_node(u: usize, n: usize) -> Result<(), BottleneckError> {
    if (1..=n).contains(&u) {
        Ok(())
    } else {
        Err(BottleneckError::NodeOutOfRange { node: u, n })
    }
}
