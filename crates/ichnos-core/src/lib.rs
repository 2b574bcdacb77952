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

//! # Ichnos Core
//!
//! A small instrumentation engine for tracking and analyzing object graphs:
//! an identity-keyed allocation registry, a generic reachability-traversal
//! engine, a disjoint-set forest, and a directed call-graph analyzer.
//!
//! The four components are independent of each other and are meant to be
//! used side by side by an external driver (a benchmark harness, a demo,
//! a static-analysis front end). All of them are synchronous and
//! single-threaded; a shared instance must be synchronized by the caller.

#![warn(missing_docs)]

pub mod graph;
pub mod memory;

pub use graph::call_graph::{CallGraphAnalyzer, CycleError};
pub use graph::disjoint_set::{DisjointSetForest, ForestError};
pub use graph::traversal::{ChildSource, GraphTraversalEngine};
pub use memory::registry::{AllocationRecord, AllocationRegistry, ObjectId, RegistryStats};
