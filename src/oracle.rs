//! All pairs widest paths in O(n^3), for validating the fast engines.
//!
//! This is Floyd-Warshall over the (max, min) semiring, where
//! [`Bottleneck::Disconnected`] is the unset entry and [`Bottleneck::Unbounded`]
//! sits on the diagonal. It imposes no size limit, callers must keep n small.

use crate::{
    answer::Bottleneck,
    error::{check_node, BottleneckError},
    graph::{check_edges, Edge},
    BottleneckSolver,
};

#[derive(Debug, Clone)]
pub struct BottleneckOracle {
    n: usize,
    /// Row-major n x n matrix, 0-indexed.
    dp: Vec<Bottleneck>,
}

impl BottleneckOracle {
    fn at(&self, i: usize, j: usize) -> Bottleneck {
        self.dp[i * self.n + j]
    }
}

impl BottleneckSolver for BottleneckOracle {
    fn build(n: usize, edges: &[Edge]) -> Result<Self, BottleneckError> {
        check_edges(n, edges)?;
        let mut dp = vec![Bottleneck::Disconnected; n * n];
        for i in 0..n {
            dp[i * n + i] = Bottleneck::Unbounded;
        }
        for e in edges {
            let (u, v) = (e.u - 1, e.v - 1);
            let w = Bottleneck::Width(e.weight);
            dp[u * n + v] = dp[u * n + v].max(w);
            dp[v * n + u] = dp[v * n + u].max(w);
        }
        for k in 0..n {
            for i in 0..n {
                let ik = dp[i * n + k];
                if ik == Bottleneck::Disconnected {
                    continue;
                }
                for j in 0..n {
                    let via = ik.min(dp[k * n + j]);
                    if via > dp[i * n + j] {
                        dp[i * n + j] = via;
                    }
                }
            }
        }
        log::debug!("bottleneck oracle: {n}x{n} matrix");
        Ok(Self { n, dp })
    }

    fn query(&self, x: usize, y: usize) -> Result<Bottleneck, BottleneckError> {
        check_node(x, self.n)?;
        check_node(y, self.n)?;
        Ok(self.at(x - 1, y - 1))
    }

    fn node_count(&self) -> usize {
        self.n
    }
}
