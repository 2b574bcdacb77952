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

//! Graph structures and algorithms.
//!
//! [`traversal`] provides depth- and breadth-first reachability over any
//! caller-supplied node graph, [`arena`] a concrete index-arena node
//! store for drivers that have no graph of their own, [`disjoint_set`] a
//! union-find forest for grouping related handles, and [`call_graph`] a
//! directed multigraph analyzer with topological ordering and cycle
//! detection.

pub mod arena;
pub mod call_graph;
pub mod disjoint_set;
pub mod traversal;

pub use arena::{NodeId, ObjectArena, ObjectNode};
pub use call_graph::{CallGraphAnalyzer, CycleError};
pub use disjoint_set::{DisjointSetForest, ForestError};
pub use traversal::{ChildSource, GraphTraversalEngine};
