//! Maximum spanning forest, built with Kruskal's algorithm on descending weights.
//!
//! For any two nodes in the same component, the lightest edge on their unique
//! forest path is the widest path value in the original graph. The forest is
//! also a (slow) engine on its own: queries walk that path.

use crate::{
    answer::Bottleneck,
    error::{check_node, BottleneckError},
    graph::{by_descending_weight, check_edges, Edge, WeightedGraph},
    union_find::UnionFind,
    BottleneckSolver,
};

#[derive(Debug, Clone)]
pub struct SpanningForest {
    /// Forest edges, in the order they were selected (descending weight).
    edges: Vec<Edge>,
    tree: WeightedGraph,
    /// Connectivity of the whole original graph, fully compressed.
    uf: UnionFind,
    components: usize,
}

impl SpanningForest {
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn tree(&self) -> &WeightedGraph {
        &self.tree
    }

    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Whether a and b are connected in the original graph.
    pub fn connected(&self, a: usize, b: usize) -> Result<bool, BottleneckError> {
        let n = self.node_count();
        check_node(a, n)?;
        check_node(b, n)?;
        Ok(self.uf.connected(a, b))
    }

    /// Connectivity of the original graph, for engines that keep their own copy.
    pub(crate) fn union_find(&self) -> &UnionFind {
        &self.uf
    }

    /// Minimum weight on the forest path between connected, distinct s and t.
    fn path_min(&self, s: usize, t: usize) -> Bottleneck {
        // (node, parent, min on the path from s)
        let mut stack = vec![(s, 0, Bottleneck::Unbounded)];
        while let Some((u, p, min)) = stack.pop() {
            if u == t {
                return min;
            }
            stack.extend(
                self.tree
                    .adjacent(u)
                    .iter()
                    .filter(|&&(v, _)| v != p)
                    .map(|&(v, w)| (v, u, min.min(Bottleneck::Width(w)))),
            );
        }
        unreachable!("{s} and {t} are connected but the forest has no path between them")
    }
}

impl BottleneckSolver for SpanningForest {
    fn build(n: usize, edges: &[Edge]) -> Result<Self, BottleneckError> {
        check_edges(n, edges)?;
        let mut uf = UnionFind::new(n + 1);
        let mut tree = WeightedGraph::new(n);
        let mut forest = Vec::with_capacity(n.saturating_sub(1));
        // Every edge goes through union, so uf ends up with full connectivity.
        for e in by_descending_weight(edges) {
            if uf.union(e.u, e.v) {
                log::trace!("forest edge {} {} ({})", e.u, e.v, e.weight);
                tree.add_edge(e.u, e.v, e.weight)?;
                forest.push(e);
            }
        }
        uf.compress_all();
        let components = uf.set_count(1..n + 1);
        debug_assert_eq!(forest.len() + components, n);
        log::debug!(
            "maximum spanning forest: {} of {} edges, {} components",
            forest.len(),
            edges.len(),
            components
        );
        Ok(Self {
            edges: forest,
            tree,
            uf,
            components,
        })
    }

    fn query(&self, x: usize, y: usize) -> Result<Bottleneck, BottleneckError> {
        Ok(if !self.connected(x, y)? {
            Bottleneck::Disconnected
        } else if x == y {
            Bottleneck::Unbounded
        } else {
            self.path_min(x, y)
        })
    }

    fn node_count(&self) -> usize {
        self.tree.node_count()
    }
}
