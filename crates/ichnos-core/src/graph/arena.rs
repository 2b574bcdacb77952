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

//! A concrete index-arena node store for object graphs.
//!
//! Drivers that do not already own a graph representation (the terminal
//! demo, the benchmark harness) build one here. Nodes live in a dense
//! vector and are addressed by [`NodeId`] handles, which doubles as the
//! identity used for traversal deduplication.

use crate::graph::traversal::ChildSource;
use serde::{Deserialize, Serialize};

/// A handle to a node stored in an [`ObjectArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Returns the arena index backing this handle.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The shape of one node in an object graph.
///
/// Mirrors the three reference-bearing shapes a runtime object can take,
/// plus leaves. Child order is the declaration/insertion order of the
/// underlying vectors, which keeps traversal results reproducible.
#[derive(Debug, Clone)]
pub enum ObjectNode {
    /// A value with no outgoing references.
    Leaf,
    /// A named-field object; children are the field values.
    Object(Vec<(String, NodeId)>),
    /// An ordered sequence; children are the elements.
    Sequence(Vec<NodeId>),
    /// A keyed mapping; children are the values.
    Mapping(Vec<(String, NodeId)>),
}

/// A dense arena of [`ObjectNode`]s.
///
/// Handles are plain indices; nodes are never removed, so a [`NodeId`]
/// stays valid for the arena's lifetime. Forward references are allowed
/// (and required for cycles): insert a placeholder [`ObjectNode::Leaf`],
/// take its id, then rewrite it via [`ObjectArena::replace`].
#[derive(Debug, Default)]
pub struct ObjectArena {
    nodes: Vec<ObjectNode>,
}

impl ObjectArena {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node and returns its handle.
    pub fn insert(&mut self, node: ObjectNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Replaces the node behind `id`, returning the previous node.
    ///
    /// This is how cyclic graphs are built: insert a leaf placeholder,
    /// then replace it once the nodes it should reference exist.
    pub fn replace(&mut self, id: NodeId, node: ObjectNode) -> ObjectNode {
        std::mem::replace(&mut self.nodes[id.index()], node)
    }

    /// Returns the node behind `id`, if the handle is in range.
    pub fn get(&self, id: NodeId) -> Option<&ObjectNode> {
        self.nodes.get(id.index())
    }

    /// Returns the number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl ChildSource for ObjectArena {
    type Node = NodeId;

    fn children(&self, node: NodeId) -> Vec<NodeId> {
        match self.get(node) {
            None | Some(ObjectNode::Leaf) => Vec::new(),
            Some(ObjectNode::Object(fields)) => fields.iter().map(|(_, id)| *id).collect(),
            Some(ObjectNode::Sequence(elements)) => elements.clone(),
            Some(ObjectNode::Mapping(entries)) => entries.iter().map(|(_, id)| *id).collect(),
        }
    }
}
