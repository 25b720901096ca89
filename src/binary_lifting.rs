//! Widest path queries by binary lifting on the maximum spanning forest.
//!
//! Every node stores its 2^k-th ancestor and the lightest edge on the way there,
//! so a query lifts both endpoints to their LCA in O(log n) jumps while folding
//! those minima.

use crate::{
    answer::Bottleneck,
    error::{check_node, BottleneckError},
    graph::Edge,
    spanning_forest::SpanningForest,
    union_find::UnionFind,
    BottleneckSolver,
};

#[derive(Debug, Clone)]
pub struct BinaryLifting {
    n: usize,
    /// Roots have depth 1. Index 0 is unused.
    depth: Vec<usize>,
    /// up[k][u]: 2^k-th ancestor of u, saturating at the root.
    up: Vec<Vec<usize>>,
    /// min_weight[k][u]: lightest edge between u and up[k][u]. Unbounded if there is none.
    min_weight: Vec<Vec<Bottleneck>>,
    uf: UnionFind,
}

impl BinaryLifting {
    /// Builds the tables from an already constructed forest.
    pub fn from_forest(forest: &SpanningForest) -> Self {
        let tree = forest.tree();
        let n = tree.node_count();
        // Depth differences are below n <= 2^log.
        let log = n.next_power_of_two().trailing_zeros() as usize;
        let mut depth = vec![0; n + 1];
        let mut up = vec![vec![0; n + 1]; log + 1];
        let mut min_weight = vec![vec![Bottleneck::Unbounded; n + 1]; log + 1];

        let mut stack = Vec::new();
        for root in 1..=n {
            if depth[root] != 0 {
                continue;
            }
            depth[root] = 1;
            up[0][root] = root;
            stack.push(root);
            while let Some(u) = stack.pop() {
                for &(v, w) in tree.adjacent(u) {
                    if depth[v] == 0 {
                        depth[v] = depth[u] + 1;
                        up[0][v] = u;
                        min_weight[0][v] = Bottleneck::Width(w);
                        stack.push(v);
                    }
                }
            }
        }

        for k in 1..=log {
            for u in 1..=n {
                let mid = up[k - 1][u];
                up[k][u] = up[k - 1][mid];
                min_weight[k][u] = min_weight[k - 1][u].min(min_weight[k - 1][mid]);
            }
        }
        log::debug!("binary lifting: {n} nodes, {} levels", log + 1);
        Self {
            n,
            depth,
            up,
            min_weight,
            uf: forest.union_find().clone(),
        }
    }

    /// Number of levels in the ancestor table.
    pub fn levels(&self) -> usize {
        self.up.len()
    }

    pub fn depth(&self, u: usize) -> Result<usize, BottleneckError> {
        check_node(u, self.n)?;
        Ok(self.depth[u])
    }

    /// Jumps from u by 2^k, folding the lightest edge passed into `acc`.
    fn jump(&self, u: usize, k: usize, acc: &mut Bottleneck) -> usize {
        *acc = (*acc).min(self.min_weight[k][u]);
        self.up[k][u]
    }

    /// x and y must be distinct and in the same component.
    fn lift(&self, mut x: usize, mut y: usize) -> Bottleneck {
        let mut acc = Bottleneck::Unbounded;
        if self.depth[x] > self.depth[y] {
            std::mem::swap(&mut x, &mut y);
        }
        let diff = self.depth[y] - self.depth[x];
        for k in 0..self.levels() {
            if (diff >> k) & 1 == 1 {
                y = self.jump(y, k, &mut acc);
            }
        }
        if x == y {
            // x was an ancestor of y
            return acc;
        }
        for k in (0..self.levels()).rev() {
            if self.up[k][x] != self.up[k][y] {
                x = self.jump(x, k, &mut acc);
                y = self.jump(y, k, &mut acc);
            }
        }
        self.jump(x, 0, &mut acc);
        self.jump(y, 0, &mut acc);
        debug_assert!(acc != Bottleneck::Unbounded);
        acc
    }
}

impl BottleneckSolver for BinaryLifting {
    fn build(n: usize, edges: &[Edge]) -> Result<Self, BottleneckError> {
        SpanningForest::build(n, edges).map(|forest| Self::from_forest(&forest))
    }

    fn query(&self, x: usize, y: usize) -> Result<Bottleneck, BottleneckError> {
        check_node(x, self.n)?;
        check_node(y, self.n)?;
        Ok(if !self.uf.connected(x, y) {
            Bottleneck::Disconnected
        } else if x == y {
            Bottleneck::Unbounded
        } else {
            self.lift(x, y)
        })
    }

    fn node_count(&self) -> usize {
        self.n
    }
}
