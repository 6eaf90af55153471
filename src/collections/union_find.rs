//! Weighted quick-union with path compression.
//!
//! Maintains a collection of disjoint sets over elements `0..n` backed by
//! two flat arrays (`parent` and `size`), with no per-node allocation.
//!
//! # Algorithm
//!
//! **Union by size**: the root of the smaller tree is attached under the
//! root of the larger one, which bounds tree height by ⌊log₂ n⌋ + 1.
//! **Path compression** during `find` re-points every visited node at the
//! root, giving amortized O(α(n)) per operation.
//!
//! # References
//!
//! - Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm"
//! - Sedgewick & Wayne (2011), *Algorithms* 4th ed., §1.5

use std::collections::TryReserveError;

/// Disjoint-set forest with union by size and path compression.
///
/// # Examples
/// ```
/// use u_percolation::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// assert_eq!(uf.component_count(), 5);
///
/// uf.union(0, 1);
/// uf.union(2, 3);
/// assert_eq!(uf.component_count(), 3);
///
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(0, 2));
///
/// uf.union(1, 3);
/// assert!(uf.connected(0, 2));
/// assert_eq!(uf.component_size(0), 4);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Like [`new`](Self::new), but reports allocation failure instead of
    /// aborting.
    pub fn try_new(n: usize) -> Result<Self, TryReserveError> {
        let mut parent = Vec::new();
        parent.try_reserve_exact(n)?;
        parent.extend(0..n);

        let mut size = Vec::new();
        size.try_reserve_exact(n)?;
        size.resize(n, 1);

        Ok(Self {
            parent,
            size,
            components: n,
        })
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds the root of the set containing `x`.
    ///
    /// Two passes: walk up to the root, then walk the same path again
    /// pointing each node directly at the root.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The smaller tree goes under the larger; on a tie `y`'s root is
    /// attached under `x`'s root.
    ///
    /// # Returns
    /// `true` if `x` and `y` were in different sets (and are now merged),
    /// `false` if they were already in the same set.
    ///
    /// # Panics
    /// Panics if `x >= len()` or `y >= len()`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        let (big, small) = if self.size[root_x] < self.size[root_y] {
            (root_y, root_x)
        } else {
            (root_x, root_y)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];

        self.components -= 1;
        true
    }

    /// Returns `true` if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Returns the number of disjoint sets.
    ///
    /// # Complexity
    /// O(1)
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the size of the set containing `x`.
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Depth of `x` below its root, without compressing.
    #[cfg(test)]
    fn depth(&self, x: usize) -> usize {
        let mut depth = 0;
        let mut node = x;
        while self.parent[node] != node {
            node = self.parent[node];
            depth += 1;
        }
        depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.component_count(), 5);
    }

    #[test]
    fn test_new_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.component_count(), 0);
    }

    #[test]
    fn test_try_new_matches_new() {
        let mut uf = UnionFind::try_new(4).unwrap();
        assert_eq!(uf.len(), 4);
        assert_eq!(uf.component_count(), 4);
        assert!(uf.union(0, 3));
        assert_eq!(uf.component_size(3), 2);
    }

    #[test]
    fn test_try_new_reports_capacity_overflow() {
        assert!(UnionFind::try_new(usize::MAX).is_err());
    }

    #[test]
    fn test_find_initial() {
        let mut uf = UnionFind::new(5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn test_union_same_set() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(!uf.union(1, 0));
        assert_eq!(uf.component_count(), 4);
    }

    #[test]
    fn test_smaller_tree_goes_under_larger() {
        let mut uf = UnionFind::new(6);
        uf.union(0, 1);
        uf.union(0, 2);
        // {3} is smaller than {0,1,2}, so 0's root must stay the root even
        // though it is passed second.
        uf.union(3, 0);
        assert_eq!(uf.find(3), uf.find(0));
        assert_eq!(uf.find(0), 0);
        assert_eq!(uf.component_size(3), 4);
    }

    #[test]
    fn test_tie_keeps_first_root() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(2, 0);
        assert_eq!(uf.find(1), 2);
    }

    #[test]
    fn test_path_compression_flattens() {
        let mut uf = UnionFind::new(8);
        // Build a tree of height 3 by merging equal-sized pairs.
        uf.union(0, 1);
        uf.union(2, 3);
        uf.union(4, 5);
        uf.union(6, 7);
        uf.union(0, 2);
        uf.union(4, 6);
        uf.union(0, 4);
        assert_eq!(uf.depth(7), 3);

        let root = uf.find(7);
        assert_eq!(uf.depth(7), 1);
        assert_eq!(uf.depth(6), 1);
        assert_eq!(root, 0);
    }

    #[test]
    fn test_large_star_merge() {
        let n = 200_000;
        let mut uf = UnionFind::new(n);
        for i in 1..n {
            uf.union(0, i);
        }
        assert_eq!(uf.component_count(), 1);
        assert_eq!(uf.component_size(n - 1), n);
    }

    #[test]
    fn test_all_in_one() {
        let mut uf = UnionFind::new(5);
        for i in 0..4 {
            uf.union(i, i + 1);
        }
        assert_eq!(uf.component_count(), 1);
        for i in 0..5 {
            for j in 0..5 {
                assert!(uf.connected(i, j));
            }
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn union_find_transitivity(
            n in 2_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y);
                }
            }

            for x in 0..n {
                for y in 0..n {
                    for z in 0..n {
                        if uf.connected(x, y) && uf.connected(y, z) {
                            prop_assert!(
                                uf.connected(x, z),
                                "transitivity violated: {x}~{y} and {y}~{z} but not {x}~{z}"
                            );
                        }
                    }
                }
            }
        }

        #[test]
        fn component_count_invariant(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..50),
        ) {
            let mut uf = UnionFind::new(n);
            let mut expected_components = n;

            for &(x, y) in &ops {
                if x < n && y < n && uf.union(x, y) {
                    expected_components -= 1;
                }
            }

            prop_assert_eq!(uf.component_count(), expected_components);
        }

        #[test]
        fn component_sizes_sum_to_n(
            n in 1_usize..20,
            ops in proptest::collection::vec((0_usize..20, 0_usize..20), 0..30),
        ) {
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n {
                    uf.union(x, y);
                }
            }

            let mut total = 0;
            for i in 0..n {
                if uf.find(i) == i {
                    total += uf.component_size(i);
                }
            }
            prop_assert_eq!(total, n, "component sizes should sum to n");
        }

        #[test]
        fn weighted_height_is_logarithmic(
            n in 1_usize..64,
            ops in proptest::collection::vec((0_usize..64, 0_usize..64), 0..100),
        ) {
            // Only unions touching roots, so no compression happens before
            // the depth check.
            let mut uf = UnionFind::new(n);
            for &(x, y) in &ops {
                if x < n && y < n && uf.parent[x] == x && uf.parent[y] == y {
                    uf.union(x, y);
                }
            }
            let bound = (usize::BITS - n.leading_zeros()) as usize;
            for x in 0..n {
                prop_assert!(uf.depth(x) <= bound, "depth {} > {}", uf.depth(x), bound);
            }
        }
    }
}
