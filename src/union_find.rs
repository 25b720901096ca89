//! Disjoint set forest with path compression and union by rank.

use std::ops::Range;

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// `len` singleton sets, with ids `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Appends a new singleton set and returns its id.
    pub fn add(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        id
    }

    /// Representative of the set containing x. Compresses the path behind it.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut u = x;
        while self.parent[u] != root {
            u = std::mem::replace(&mut self.parent[u], root);
        }
        root
    }

    /// Representative of the set containing x, without mutation.
    /// Constant time after [`UnionFind::compress_all`].
    pub fn root(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets of a and b. Returns false if they were already the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.rank[ra] < self.rank[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        if self.rank[ra] == self.rank[rb] {
            self.rank[ra] += 1;
        }
        true
    }

    /// Merges the sets of a and b under `rep`, which must be a singleton.
    /// Returns false, leaving `rep` untouched, if a and b were already the same set.
    pub fn merge_into(&mut self, a: usize, b: usize, rep: usize) -> bool {
        debug_assert!(self.parent[rep] == rep && self.rank[rep] == 0);
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rep;
        self.parent[rb] = rep;
        self.rank[rep] = self.rank[ra].max(self.rank[rb]) + 1;
        true
    }

    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.root(a) == self.root(b)
    }

    /// Points every id directly at its representative.
    pub fn compress_all(&mut self) {
        for u in 0..self.parent.len() {
            self.find(u);
        }
    }

    /// Number of set representatives among `ids`. Equals the number of sets
    /// covering `ids` when no set reaches outside of it.
    pub fn set_count(&self, ids: Range<usize>) -> usize {
        ids.filter(|&u| self.root(u) == u).count()
    }
}
