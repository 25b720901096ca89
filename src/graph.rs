use crate::{
    answer::Weight,
    error::{check_node, BottleneckError},
};

/// Undirected weighted edge between nodes in `1..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: Weight) -> Self {
        Self { u, v, weight }
    }
}

impl From<(usize, usize, Weight)> for Edge {
    fn from((u, v, weight): (usize, usize, Weight)) -> Self {
        Self { u, v, weight }
    }
}

/// Checks every endpoint of `edges` against a graph on `n` nodes.
pub(crate) fn check_edges(n: usize, edges: &[Edge]) -> Result<(), BottleneckError> {
    for (index, e) in edges.iter().enumerate() {
        if check_node(e.u, n).is_err() || check_node(e.v, n).is_err() {
            return Err(BottleneckError::EdgeOutOfRange {
                index,
                u: e.u,
                v: e.v,
                n,
            });
        }
    }
    Ok(())
}

/// Edges sorted by descending weight, the order every maximum spanning forest
/// construction consumes them in. Equal weights keep their input order.
pub(crate) fn by_descending_weight(edges: &[Edge]) -> Vec<Edge> {
    let mut sorted = edges.to_vec();
    sorted.sort_by(|a, b| b.weight.cmp(&a.weight));
    sorted
}

/// Adjacency lists for nodes `1..=n`. Index 0 exists but is never used.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adj: Vec<Vec<(usize, Weight)>>,
    edge_count: usize,
}

impl WeightedGraph {
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![Vec::new(); n + 1],
            edge_count: 0,
        }
    }

    /// Adds the edge in both directions.
    pub fn add_edge(
        &mut self,
        u: usize,
        v: usize,
        weight: Weight,
    ) -> Result<(), BottleneckError> {
        let n = self.node_count();
        if check_node(u, n).is_err() || check_node(v, n).is_err() {
            return Err(BottleneckError::EdgeOutOfRange {
                index: self.edge_count,
                u,
                v,
                n,
            });
        }
        self.adj[u].push((v, weight));
        self.adj[v].push((u, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Neighbors of u with the weight of the connecting edge, in insertion order.
    pub fn neighbors(&self, u: usize) -> Result<&[(usize, Weight)], BottleneckError> {
        check_node(u, self.node_count())?;
        Ok(&self.adj[u])
    }

    /// `neighbors` for ids already known to be in range.
    pub(crate) fn adjacent(&self, u: usize) -> &[(usize, Weight)] {
        &self.adj[u]
    }

    pub fn node_count(&self) -> usize {
        self.adj.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
