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

//! Generic depth- and breadth-first reachability traversal.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Supplies the outgoing references of nodes in an object graph.
///
/// The traversal engine is generic over any node handle the caller can
/// enumerate children for, so no runtime type introspection is involved.
/// Implementations must return children in a stable order across runs
/// (insertion/declaration order of fields, elements, or mapping entries)
/// so traversal results are reproducible.
pub trait ChildSource {
    /// The node handle type. Identity of a node is the handle itself;
    /// structurally equal but distinct nodes must have distinct handles.
    type Node: Copy + Eq + Hash;

    /// Returns the children of `node`, in stable enumeration order.
    /// A leaf returns an empty vector.
    fn children(&self, node: Self::Node) -> Vec<Self::Node>;
}

/// Depth- and breadth-first reachability traversal over a [`ChildSource`].
///
/// Both traversals are read-only: they never mutate the graph they walk
/// and hold no ownership over it; a result is just a set of node handles.
/// Deduplication is by handle identity and is checked before descending
/// or enqueuing, so cyclic graphs (self-loops, mutual references) are
/// safe to traverse.
///
/// `max_depth` and the visited set are the only things bounding a
/// traversal. Walking a pathological graph without a sane depth bound
/// risks unbounded memory and time; that guard is the caller's
/// responsibility, not a guarantee of this engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphTraversalEngine;

impl GraphTraversalEngine {
    /// Creates a new traversal engine.
    pub fn new() -> Self {
        Self
    }

    /// Pre-order depth-first traversal from `root`.
    ///
    /// A node is added to the visited set at the moment it is first
    /// visited. Children are expanded only while the current node's
    /// depth is below `max_depth`; a node at exactly `max_depth` is
    /// visited but not expanded further. The root is at depth 0.
    ///
    /// Uses an explicit stack rather than recursion, so deep or highly
    /// cyclic graphs cannot overflow the call stack.
    pub fn dfs<S: ChildSource>(
        &self,
        source: &S,
        root: S::Node,
        max_depth: usize,
    ) -> HashSet<S::Node> {
        let mut visited = HashSet::new();
        let mut stack = vec![(root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            if depth >= max_depth {
                continue;
            }
            // Push children in reverse so the stack pops them in
            // enumeration order, keeping the visitation pre-order.
            let children = source.children(node);
            for &child in children.iter().rev() {
                if !visited.contains(&child) {
                    stack.push((child, depth + 1));
                }
            }
        }

        visited
    }

    /// Level-order breadth-first traversal from `root`.
    ///
    /// A node's depth is fixed at the moment it is first discovered
    /// (enqueued), not when dequeued. As with [`GraphTraversalEngine::dfs`],
    /// a node at exactly `max_depth` is visited but not expanded, and
    /// the root is at depth 0.
    pub fn bfs<S: ChildSource>(
        &self,
        source: &S,
        root: S::Node,
        max_depth: usize,
    ) -> HashSet<S::Node> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(root);
        queue.push_back((root, 0usize));

        while let Some((node, depth)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }
            for child in source.children(node) {
                if visited.insert(child) {
                    queue.push_back((child, depth + 1));
                }
            }
        }

        visited
    }
}
