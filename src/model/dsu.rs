//! Disjoint-set union over dense node ids
//!
//! Path halving in [`DisjointSet::find`] and union by rank. Equal ranks make
//! the lower id the root, so representatives do not depend on call order.

use super::NodeId;

#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<NodeId>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// `n` singleton sets
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of the set containing `x`
    pub fn find(&mut self, mut x: NodeId) -> NodeId {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merge the sets of `a` and `b`; false if they were already one set
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
                self.parent[child] = root;
                self.rank[root] = self.rank[root].saturating_add(1);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_find() {
        let mut dsu = DisjointSet::new(5);
        assert!(dsu.union(0, 1));
        assert!(dsu.union(3, 4));
        assert!(!dsu.union(1, 0));
        assert_eq!(dsu.find(0), dsu.find(1));
        assert_ne!(dsu.find(1), dsu.find(3));

        assert!(dsu.union(1, 4));
        let root = dsu.find(0);
        for x in [1, 3, 4] {
            assert_eq!(dsu.find(x), root);
        }
        assert_eq!(dsu.find(2), 2);
    }

    #[test]
    fn test_equal_rank_prefers_lower_id() {
        let mut dsu = DisjointSet::new(3);
        dsu.union(2, 1);
        assert_eq!(dsu.find(2), 1);
    }
}
