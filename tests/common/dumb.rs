use widest_path::{
    union_find::UnionFind, Bottleneck, BottleneckError, BottleneckSolver, Edge,
};

/// Answers each query from scratch: replays the edges by descending weight
/// and reports the weight that first connects the two endpoints.
#[derive(Debug)]
pub struct Dumb {
    n: usize,
    edges: Vec<Edge>,
}

impl BottleneckSolver for Dumb {
    fn build(n: usize, edges: &[Edge]) -> Result<Self, BottleneckError> {
        let mut edges = edges.to_vec();
        for (index, e) in edges.iter().enumerate() {
            if !(1..=n).contains(&e.u) || !(1..=n).contains(&e.v) {
                return Err(BottleneckError::EdgeOutOfRange {
                    index,
                    u: e.u,
                    v: e.v,
                    n,
                });
            }
        }
        edges.sort_by_key(|e| std::cmp::Reverse(e.weight));
        Ok(Self { n, edges })
    }

    fn query(&self, x: usize, y: usize) -> Result<Bottleneck, BottleneckError> {
        for node in [x, y] {
            if !(1..=self.n).contains(&node) {
                return Err(BottleneckError::NodeOutOfRange { node, n: self.n });
            }
        }
        if x == y {
            return Ok(Bottleneck::Unbounded);
        }
        let mut uf = UnionFind::new(self.n + 1);
        for e in &self.edges {
            uf.union(e.u, e.v);
            if uf.find(x) == uf.find(y) {
                return Ok(Bottleneck::Width(e.weight));
            }
        }
        Ok(Bottleneck::Disconnected)
    }

    fn node_count(&self) -> usize {
        self.n
    }
}
