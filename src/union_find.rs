//! Weighted quick-union over a fixed universe of `0..len` elements.
//!
//! Smaller trees are always hung under larger ones, so a tree over `m`
//! elements is at most `log2(m)` deep. Paths are halved while unioning;
//! queries take `&self` and never restructure the forest.

/// Disjoint-set forest with union by size.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            count: len,
        }
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Root of the set containing `p`.
    ///
    /// Panics if `p` is outside the universe.
    pub fn find(&self, mut p: usize) -> usize {
        while self.parent[p] != p {
            p = self.parent[p];
        }
        p
    }

    fn find_compressing(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            let grandparent = self.parent[self.parent[p]];
            self.parent[p] = grandparent;
            p = grandparent;
        }
        p
    }

    /// Whether `a` and `b` belong to the same set.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merge the sets containing `a` and `b`. No-op if already merged.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find_compressing(a);
        let root_b = self.find_compressing(b);
        if root_a == root_b {
            return;
        }

        if self.size[root_a] < self.size[root_b] {
            self.parent[root_a] = root_b;
            self.size[root_b] += self.size[root_a];
        } else {
            self.parent[root_b] = root_a;
            self.size[root_a] += self.size[root_b];
        }
        self.count -= 1;
    }
}
