// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Disjoint-set forest (union-find) with path compression and union by rank.

use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;

/// An error from a disjoint-set operation.
///
/// This is a precondition violation in the caller's usage sequence
/// (e.g. forgetting [`DisjointSetForest::make_set`] before `find` or
/// `union`). It is surfaced immediately, is not retryable, and never
/// leaves the forest in a corrupted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ForestError {
    /// The element was never registered with `make_set`.
    #[error("element was never registered with make_set")]
    Unregistered,
}

/// A disjoint-set forest over copyable element handles.
///
/// Elements are partitioned into groups, each represented by a tree with
/// a canonical root. Lookups compress paths and merges attach by rank,
/// so any interleaved sequence of operations runs in amortized
/// near-constant (inverse-Ackermann) time per operation.
///
/// Invariants: a root is its own parent; following parent links from any
/// registered element reaches a root in finitely many steps; the rank of
/// a node never decreases.
#[derive(Debug, Clone, Default)]
pub struct DisjointSetForest<T> {
    parent: HashMap<T, T>,
    rank: HashMap<T, u32>,
}

impl<T: Copy + Eq + Hash> DisjointSetForest<T> {
    /// Creates a new, empty forest.
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
        }
    }

    /// Registers `x` as its own singleton group with rank 0.
    ///
    /// Idempotent: calling again on an already-registered element is a
    /// no-op and does not reset its group membership.
    pub fn make_set(&mut self, x: T) {
        if !self.parent.contains_key(&x) {
            self.parent.insert(x, x);
            self.rank.insert(x, 0);
        }
    }

    /// Returns the canonical root of `x`'s group.
    ///
    /// Compresses the walked path by re-pointing every visited node
    /// directly at the discovered root, flattening future lookups. Both
    /// passes are iterative, so arbitrarily deep chains are safe.
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::Unregistered`] if `x` was never passed to
    /// [`DisjointSetForest::make_set`].
    pub fn find(&mut self, x: T) -> Result<T, ForestError> {
        if !self.parent.contains_key(&x) {
            return Err(ForestError::Unregistered);
        }

        let mut root = x;
        loop {
            let up = self.parent[&root];
            if up == root {
                break;
            }
            root = up;
        }

        let mut current = x;
        while current != root {
            let up = self.parent[&current];
            self.parent.insert(current, root);
            current = up;
        }

        Ok(root)
    }

    /// Merges the groups containing `x` and `y`.
    ///
    /// If both already share a root this is a no-op. Otherwise the
    /// lower-rank root is attached under the higher-rank root; on a rank
    /// tie, `y`'s root goes under `x`'s root and `x`'s root gains one
    /// rank. The tie-break direction is fixed so grouping stays
    /// reproducible across implementations.
    ///
    /// # Errors
    ///
    /// Returns [`ForestError::Unregistered`] if either element was never
    /// registered; the forest is left untouched in that case.
    pub fn union(&mut self, x: T, y: T) -> Result<(), ForestError> {
        if !self.parent.contains_key(&y) {
            return Err(ForestError::Unregistered);
        }
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(());
        }

        let rank_x = self.rank[&root_x];
        let rank_y = self.rank[&root_y];
        if rank_x < rank_y {
            self.parent.insert(root_x, root_y);
        } else if rank_x > rank_y {
            self.parent.insert(root_y, root_x);
        } else {
            self.parent.insert(root_y, root_x);
            self.rank.insert(root_x, rank_x + 1);
        }

        Ok(())
    }

    /// Returns `true` if `x` has been registered.
    pub fn contains(&self, x: T) -> bool {
        self.parent.contains_key(&x)
    }

    /// Returns the number of registered elements (not groups).
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no element has been registered.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_scenario() {
        let mut forest = DisjointSetForest::new();
        for i in 0..5 {
            forest.make_set(i);
        }
        forest.union(0, 1).unwrap();
        forest.union(2, 3).unwrap();

        assert_eq!(forest.find(0).unwrap(), forest.find(1).unwrap());
        assert_eq!(forest.find(2).unwrap(), forest.find(3).unwrap());
        assert_ne!(forest.find(0).unwrap(), forest.find(2).unwrap());
        assert_ne!(forest.find(4).unwrap(), forest.find(0).unwrap());
    }

    #[test]
    fn test_make_set_is_idempotent() {
        let mut forest = DisjointSetForest::new();
        forest.make_set(7);
        forest.make_set(8);
        forest.union(7, 8).unwrap();

        // Re-registering must not reset group membership.
        forest.make_set(7);
        forest.make_set(8);
        assert_eq!(forest.find(7).unwrap(), forest.find(8).unwrap());
        assert_eq!(forest.len(), 2);
    }

    #[test]
    fn test_find_unregistered_is_an_error() {
        let mut forest: DisjointSetForest<u32> = DisjointSetForest::new();
        assert_eq!(forest.find(42), Err(ForestError::Unregistered));

        forest.make_set(1);
        assert_eq!(forest.union(1, 42), Err(ForestError::Unregistered));
        assert_eq!(forest.union(42, 1), Err(ForestError::Unregistered));
        // The failed unions must not have registered anything.
        assert!(!forest.contains(42));
        assert_eq!(forest.find(1).unwrap(), 1);
    }

    #[test]
    fn test_rank_tie_attaches_y_under_x() {
        let mut forest = DisjointSetForest::new();
        forest.make_set('a');
        forest.make_set('b');

        // Equal ranks: 'b''s root goes under 'a''s root.
        forest.union('a', 'b').unwrap();
        assert_eq!(forest.find('b').unwrap(), 'a');

        // 'a' now has rank 1; a fresh singleton attaches under it even
        // when named first.
        forest.make_set('c');
        forest.union('c', 'a').unwrap();
        assert_eq!(forest.find('c').unwrap(), 'a');
    }

    #[test]
    fn test_transitive_closure_matches_union_history() {
        let mut forest = DisjointSetForest::new();
        for i in 0..8 {
            forest.make_set(i);
        }
        forest.union(0, 1).unwrap();
        forest.union(2, 3).unwrap();
        forest.union(1, 2).unwrap(); // Connects {0,1} with {2,3}.
        forest.union(4, 5).unwrap();
        // Re-union of an already-connected pair is a no-op.
        forest.union(3, 0).unwrap();

        for a in 0..4 {
            for b in 0..4 {
                assert_eq!(forest.find(a).unwrap(), forest.find(b).unwrap());
            }
        }
        assert_eq!(forest.find(4).unwrap(), forest.find(5).unwrap());
        assert_ne!(forest.find(0).unwrap(), forest.find(4).unwrap());
        assert_ne!(forest.find(0).unwrap(), forest.find(6).unwrap());
        assert_ne!(forest.find(6).unwrap(), forest.find(7).unwrap());
    }

    #[test]
    fn test_large_sequential_union_run() {
        // A long run of sequential unions; rank attachment keeps the
        // trees shallow and every element must end up in one group.
        let n = 100_000u32;
        let mut forest = DisjointSetForest::new();
        for i in 0..n {
            forest.make_set(i);
        }
        for i in 1..n {
            forest.union(i - 1, i).unwrap();
        }

        let root = forest.find(n - 1).unwrap();
        assert_eq!(root, forest.find(0).unwrap());
    }
}
