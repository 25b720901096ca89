//! Widest path queries by heavy-light decomposition of the Kruskal reconstruction tree.
//!
//! Each maximum spanning forest edge becomes a virtual node whose children are
//! the two components it merged. Original nodes are the leaves, and since
//! edges are merged in descending weight order the LCA of two original nodes
//! is the virtual node of the lightest edge on their forest path. Its weight
//! is the answer, so queries only need the LCA, found by jumping heavy chains.

use std::fmt::{Debug, Formatter};

use debug_tree::TreeBuilder;
use derivative::Derivative;

use crate::{
    answer::{Bottleneck, Weight},
    error::{check_node, BottleneckError},
    graph::{by_descending_weight, check_edges, Edge},
    spanning_forest::SpanningForest,
    union_find::UnionFind,
    BottleneckSolver,
};

pub type Idx = usize;

/// Missing parent or heavy child.
pub const EMPTY: Idx = usize::MAX;

fn node_fmt(u: &Idx, f: &mut Formatter) -> std::fmt::Result {
    if *u == EMPTY {
        write!(f, "∅")
    } else {
        write!(f, "{u}")
    }
}

#[derive(Derivative, Clone)]
#[derivative(Debug)]
struct Node {
    #[derivative(Debug(format_with = "node_fmt"))]
    parent: Idx,
    children: Vec<Idx>,
    depth: usize,
    /// Number of nodes in the subtree, including this one.
    size: usize,
    #[derivative(Debug(format_with = "node_fmt"))]
    heavy: Idx,
    /// Topmost node of the heavy chain containing this node.
    top: Idx,
    /// Merge weight for virtual nodes, None for original nodes.
    weight: Option<Weight>,
}

impl Node {
    fn new(weight: Option<Weight>) -> Self {
        Self {
            parent: EMPTY,
            children: Vec::new(),
            depth: 0,
            size: 1,
            heavy: EMPTY,
            top: EMPTY,
            weight,
        }
    }
}

#[derive(Clone)]
pub struct HeavyLight {
    n: usize,
    /// Original nodes in 1..=n, virtual nodes after them. Index 0 is unused.
    nodes: Vec<Node>,
    /// Connectivity over the augmented nodes, fully compressed.
    uf: UnionFind,
    roots: Vec<Idx>,
}

impl Debug for HeavyLight {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        {
            let _b = builder.add_branch("HeavyLight");
            let mut depth = 0;
            // (node, depth below the header)
            let mut stack: Vec<_> = self.roots.iter().rev().map(|&r| (r, 0)).collect();
            while let Some((u, d)) = stack.pop() {
                for _ in d..depth {
                    builder.exit();
                }
                depth = d;
                let nu = &self.nodes[u];
                builder.add_leaf(&format!("[{u}] {nu:?}"));
                if !nu.children.is_empty() {
                    builder.enter();
                    depth += 1;
                    stack.extend(nu.children.iter().rev().map(|&c| (c, d + 1)));
                }
            }
            for _ in 0..depth {
                builder.exit();
            }
        }
        writeln!(f, "{}", builder.string())
    }
}

impl HeavyLight {
    /// Builds from an already constructed forest. Its edges are already sorted.
    pub fn from_forest(forest: &SpanningForest) -> Self {
        Self::from_sorted(forest.node_count(), forest.edges())
    }

    /// `edges` must be valid and sorted by descending weight.
    fn from_sorted(n: usize, edges: &[Edge]) -> Self {
        let mut nodes: Vec<_> = (0..=n).map(|_| Node::new(None)).collect();
        let mut uf = UnionFind::new(n + 1);
        for e in edges {
            let (ru, rv) = (uf.find(e.u), uf.find(e.v));
            if ru == rv {
                continue;
            }
            let x = uf.add();
            debug_assert_eq!(x, nodes.len());
            uf.merge_into(ru, rv, x);
            log::trace!("virtual node {x} ({}) over {ru} and {rv}", e.weight);
            let mut node = Node::new(Some(e.weight));
            node.children = vec![ru, rv];
            nodes.push(node);
            nodes[ru].parent = x;
            nodes[rv].parent = x;
        }
        uf.compress_all();
        let roots: Vec<Idx> = (1..nodes.len())
            .filter(|&u| nodes[u].parent == EMPTY)
            .collect();
        let mut hl = Self {
            n,
            nodes,
            uf,
            roots,
        };
        for i in 0..hl.roots.len() {
            let root = hl.roots[i];
            hl.compute_sizes(root);
            hl.assign_chains(root);
        }
        log::debug!(
            "heavy-light: {} original and {} virtual nodes, {} chains, {} components",
            n,
            hl.nodes.len() - n - 1,
            hl.chain_count(),
            hl.roots.len()
        );
        hl
    }

    /// First pass: depth on the way down, size and heavy child on the way up.
    fn compute_sizes(&mut self, root: Idx) {
        // (node, next child to visit)
        let mut stack = vec![(root, 0)];
        self.nodes[root].depth = 0;
        while let Some((u, i)) = stack.pop() {
            if let Some(&c) = self.nodes[u].children.get(i) {
                stack.push((u, i + 1));
                self.nodes[c].depth = self.nodes[u].depth + 1;
                stack.push((c, 0));
                continue;
            }
            let p = self.nodes[u].parent;
            if p != EMPTY {
                let size = self.nodes[u].size;
                let heavy = self.nodes[p].heavy;
                if heavy == EMPTY || self.nodes[heavy].size < size {
                    self.nodes[p].heavy = u;
                }
                self.nodes[p].size += size;
            }
        }
    }

    /// Second pass: the heavy child continues its parent's chain, light children start new ones.
    fn assign_chains(&mut self, root: Idx) {
        let mut stack = vec![(root, root)];
        while let Some((u, top)) = stack.pop() {
            self.nodes[u].top = top;
            let heavy = self.nodes[u].heavy;
            for &c in &self.nodes[u].children {
                stack.push((c, if c == heavy { top } else { c }));
            }
        }
    }

    /// Number of original nodes plus virtual nodes.
    pub fn augmented_len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn chain_count(&self) -> usize {
        (1..self.nodes.len())
            .filter(|&u| self.nodes[u].top == u)
            .count()
    }

    /// Weight of the forest edge behind a virtual node.
    pub fn virtual_weight(&self, u: Idx) -> Option<Weight> {
        self.nodes.get(u).and_then(|node| node.weight)
    }

    /// Lowest common ancestor of x and y in the augmented forest, None if disconnected.
    pub fn lca(&self, x: usize, y: usize) -> Result<Option<Idx>, BottleneckError> {
        check_node(x, self.n)?;
        check_node(y, self.n)?;
        Ok(self.uf.connected(x, y).then(|| self.lca_connected(x, y)))
    }

    fn lca_connected(&self, mut u: Idx, mut v: Idx) -> Idx {
        let n = &self.nodes;
        while n[u].top != n[v].top {
            if n[n[u].top].depth > n[n[v].top].depth {
                u = n[n[u].top].parent;
            } else {
                v = n[n[v].top].parent;
            }
        }
        if n[u].depth < n[v].depth {
            u
        } else {
            v
        }
    }
}

impl BottleneckSolver for HeavyLight {
    fn build(n: usize, edges: &[Edge]) -> Result<Self, BottleneckError> {
        check_edges(n, edges)?;
        Ok(Self::from_sorted(n, &by_descending_weight(edges)))
    }

    fn query(&self, x: usize, y: usize) -> Result<Bottleneck, BottleneckError> {
        Ok(match self.lca(x, y)? {
            None => Bottleneck::Disconnected,
            Some(_) if x == y => Bottleneck::Unbounded,
            Some(lca) => {
                let w = self.nodes[lca].weight;
                debug_assert!(w.is_some(), "LCA {lca} of {x} and {y} is not virtual");
                w.map_or(Bottleneck::Unbounded, Bottleneck::Width)
            }
        })
    }

    fn node_count(&self) -> usize {
        self.n
    }
}
