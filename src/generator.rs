//! Seeded random workloads: graphs, query sets and the preset benchmark scales.

use std::collections::BTreeSet;

use rand::Rng;

use crate::{answer::Weight, graph::Edge, spanning_forest::SpanningForest, BottleneckSolver};

/// Shape of a random G(n, m) graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    pub n: usize,
    pub m: usize,
    pub min_weight: Weight,
    pub max_weight: Weight,
}

impl GraphConfig {
    /// Weights default to 1..=1000.
    pub fn new(n: usize, m: usize) -> Self {
        Self {
            n,
            m,
            min_weight: 1,
            max_weight: 1000,
        }
    }

    pub fn with_weights(self, min_weight: Weight, max_weight: Weight) -> Self {
        assert!(min_weight <= max_weight, "empty weight range");
        Self {
            min_weight,
            max_weight,
            ..self
        }
    }
}

/// A named benchmark size: n nodes, m edges, q queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub name: &'static str,
    pub n: usize,
    pub m: usize,
    pub q: usize,
}

impl Scale {
    pub fn graph(&self) -> GraphConfig {
        GraphConfig::new(self.n, self.m)
    }
}

pub const SCALES: [Scale; 4] = [
    Scale {
        name: "Small",
        n: 100,
        m: 200,
        q: 50,
    },
    Scale {
        name: "Medium",
        n: 500,
        m: 1000,
        q: 100,
    },
    Scale {
        name: "Large",
        n: 1000,
        m: 2000,
        q: 200,
    },
    Scale {
        name: "XL",
        n: 2000,
        m: 4000,
        q: 400,
    },
];

/// Largest n the cubic oracle is run on by the benchmarks.
pub const ORACLE_LIMIT: usize = 1200;

/// Random graph without self loops or repeated pairs. m is capped at n(n-1)/2.
pub fn random_graph(config: &GraphConfig, rng: &mut impl Rng) -> Vec<Edge> {
    let GraphConfig { n, .. } = *config;
    let m = config.m.min(n * n.saturating_sub(1) / 2);
    let mut pairs = BTreeSet::new();
    let mut edges = Vec::with_capacity(m);
    while edges.len() < m {
        let mut u = rng.gen_range(1..=n);
        let mut v = rng.gen_range(1..n);
        if v >= u {
            v += 1;
        } else {
            std::mem::swap(&mut u, &mut v);
        }
        if pairs.insert((u, v)) {
            let w = rng.gen_range(config.min_weight..=config.max_weight);
            edges.push(Edge::new(u, v, w));
        }
    }
    edges
}

/// Uniform pairs of nodes in 1..=n, self pairs included.
pub fn random_queries(n: usize, q: usize, rng: &mut impl Rng) -> Vec<(usize, usize)> {
    if n == 0 {
        return Vec::new();
    }
    (0..q)
        .map(|_| (rng.gen_range(1..=n), rng.gen_range(1..=n)))
        .collect()
}

/// Pairs of connected nodes. If they are too rare to find within a bounded
/// number of attempts, the rest is filled with uniform pairs.
pub fn connected_queries(
    forest: &SpanningForest,
    q: usize,
    rng: &mut impl Rng,
) -> Vec<(usize, usize)> {
    let n = forest.node_count();
    if n == 0 {
        return Vec::new();
    }
    let max_attempts = 20 * q * (n / 10).max(1);
    let mut queries = Vec::with_capacity(q);
    let mut attempts = 0;
    while queries.len() < q && attempts < max_attempts {
        attempts += 1;
        let (s, t) = (rng.gen_range(1..=n), rng.gen_range(1..=n));
        if forest.connected(s, t) == Ok(true) {
            queries.push((s, t));
        }
    }
    if queries.len() < q {
        log::debug!("found {} of {q} connected pairs", queries.len());
        let missing = q - queries.len();
        queries.extend(random_queries(n, missing, rng));
    }
    queries
}
