pub mod answer;
pub mod binary_lifting;
pub mod error;
pub mod generator;
pub mod graph;
pub mod heavy_light;
pub mod oracle;
pub mod spanning_forest;
pub mod union_find;

pub use answer::{Bottleneck, Weight};
pub use binary_lifting::BinaryLifting;
pub use error::BottleneckError;
pub use graph::{Edge, WeightedGraph};
pub use heavy_light::HeavyLight;
pub use oracle::BottleneckOracle;
pub use spanning_forest::SpanningForest;

/// An engine answering widest path queries on a static undirected graph.
///
/// All preprocessing happens in [`BottleneckSolver::build`]; the result is
/// immutable and can be queried from many threads at once.
pub trait BottleneckSolver: Sized {
    /// Preprocesses the graph on nodes `1..=n` with the given edges.
    fn build(n: usize, edges: &[Edge]) -> Result<Self, BottleneckError>;
    /// Maximum over all x-y paths of the minimum edge weight on the path.
    fn query(&self, x: usize, y: usize) -> Result<Bottleneck, BottleneckError>;
    /// Number of nodes of the original graph.
    fn node_count(&self) -> usize;
}

/// The fastest implemented engine on this crate.
pub type FastBottleneckSolver = HeavyLight;

/// How many of `queries` get different answers from `a` and `b`.
pub fn count_mismatches<A, B>(
    a: &A,
    b: &B,
    queries: &[(usize, usize)],
) -> Result<usize, BottleneckError>
where
    A: BottleneckSolver,
    B: BottleneckSolver,
{
    let mut mismatches = 0;
    for &(x, y) in queries {
        if a.query(x, y)? != b.query(x, y)? {
            mismatches += 1;
        }
    }
    Ok(mismatches)
}
