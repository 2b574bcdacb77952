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

//! Directed call-graph analysis: topological ordering and cycle detection.

use std::collections::{HashMap, VecDeque};
use thiserror::Error;

/// Sentinel for a node Tarjan's walk has not discovered yet.
const UNVISITED: usize = usize::MAX;

/// An error indicating that a cycle was detected in the call graph.
///
/// Carries the acyclic prefix that Kahn's algorithm managed to order
/// before the cycle was hit, plus the total function count, so callers
/// that prefer the length-comparison convention still have both numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("call graph contains a cycle ({} of {} functions ordered)", .ordered.len(), .total)]
pub struct CycleError {
    /// The functions that could be ordered before the cycle was hit,
    /// i.e. the acyclic-reachable portion of the graph.
    pub ordered: Vec<String>,
    /// The total number of known functions.
    pub total: usize,
}

/// A directed multigraph of function calls.
///
/// Function names are interned on first sight and assigned a dense
/// index, so every iteration over the function set runs in first-seen
/// order and results are deterministic across runs. Duplicate edges
/// (repeated calls) are retained: consumers reporting call counts need
/// the multiplicity.
///
/// Edges are only ever added; there is no removal.
#[derive(Debug, Default)]
pub struct CallGraphAnalyzer {
    names: Vec<String>,
    indices: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl CallGraphAnalyzer {
    /// Creates a new, empty analyzer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a call from `caller` to `callee`.
    ///
    /// Both names are registered as known functions; the edge is
    /// appended to `caller`'s adjacency list even if an identical edge
    /// already exists.
    pub fn add_call(&mut self, caller: &str, callee: &str) {
        let caller_ix = self.intern(caller);
        let callee_ix = self.intern(callee);
        self.adjacency[caller_ix].push(callee_ix);
        self.edge_count += 1;
    }

    /// Returns the number of known functions.
    pub fn function_count(&self) -> usize {
        self.names.len()
    }

    /// Returns the number of recorded call edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the known function names in first-seen order.
    pub fn functions(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Orders the functions so that every call edge points from an
    /// earlier to a later entry (Kahn's algorithm).
    ///
    /// The zero-in-degree seed queue is filled in first-seen order, so
    /// the result is deterministic for a given insertion history.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError`] if the graph contains a cycle. The error
    /// carries the acyclic prefix that could still be ordered, so the
    /// partial result is not lost.
    pub fn topological_sort(&self) -> Result<Vec<String>, CycleError> {
        let total = self.names.len();
        let mut in_degree = vec![0usize; total];
        for callees in &self.adjacency {
            for &callee in callees {
                in_degree[callee] += 1;
            }
        }

        let mut queue: VecDeque<usize> = (0..total).filter(|&n| in_degree[n] == 0).collect();
        let mut ordered = Vec::with_capacity(total);

        while let Some(node) = queue.pop_front() {
            ordered.push(self.names[node].clone());
            for &callee in &self.adjacency[node] {
                in_degree[callee] -= 1;
                if in_degree[callee] == 0 {
                    queue.push_back(callee);
                }
            }
        }

        if ordered.len() == total {
            Ok(ordered)
        } else {
            Err(CycleError { ordered, total })
        }
    }

    /// Finds the strongly connected components with two or more members
    /// (Tarjan's algorithm).
    ///
    /// Singleton components are never reported, so an acyclic graph
    /// yields an empty list; a self-loop on a single function is also
    /// excluded by this size filter. The walk keeps its own explicit
    /// frame stack, so long call chains cannot overflow the call stack.
    /// Member order within a component is unspecified.
    pub fn detect_cycles(&self) -> Vec<Vec<String>> {
        let total = self.names.len();
        let mut index = vec![UNVISITED; total];
        let mut lowlink = vec![0usize; total];
        let mut on_stack = vec![false; total];
        let mut node_stack: Vec<usize> = Vec::new();
        let mut next_index = 0usize;
        let mut components: Vec<Vec<String>> = Vec::new();

        // (node, next unexplored edge) frames replacing recursion.
        let mut frames: Vec<(usize, usize)> = Vec::new();

        for start in 0..total {
            if index[start] != UNVISITED {
                continue;
            }
            index[start] = next_index;
            lowlink[start] = next_index;
            next_index += 1;
            node_stack.push(start);
            on_stack[start] = true;
            frames.push((start, 0));

            while let Some(frame) = frames.last_mut() {
                let node = frame.0;
                if frame.1 < self.adjacency[node].len() {
                    let successor = self.adjacency[node][frame.1];
                    frame.1 += 1;
                    if index[successor] == UNVISITED {
                        index[successor] = next_index;
                        lowlink[successor] = next_index;
                        next_index += 1;
                        node_stack.push(successor);
                        on_stack[successor] = true;
                        frames.push((successor, 0));
                    } else if on_stack[successor] {
                        lowlink[node] = lowlink[node].min(index[successor]);
                    }
                } else {
                    frames.pop();
                    if let Some(parent) = frames.last() {
                        lowlink[parent.0] = lowlink[parent.0].min(lowlink[node]);
                    }
                    if lowlink[node] == index[node] {
                        let mut component = Vec::new();
                        while let Some(member) = node_stack.pop() {
                            on_stack[member] = false;
                            component.push(member);
                            if member == node {
                                break;
                            }
                        }
                        if component.len() > 1 {
                            components.push(
                                component.iter().map(|&m| self.names[m].clone()).collect(),
                            );
                        }
                    }
                }
            }
        }

        if !components.is_empty() {
            log::debug!(
                "detected {} cyclic component(s) among {} functions",
                components.len(),
                total
            );
        }
        components
    }

    /// Interns `name`, returning its dense first-seen index.
    fn intern(&mut self, name: &str) -> usize {
        if let Some(&ix) = self.indices.get(name) {
            return ix;
        }
        let ix = self.names.len();
        self.names.push(name.to_owned());
        self.indices.insert(name.to_owned(), ix);
        self.adjacency.push(Vec::new());
        ix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn analyzer_from(edges: &[(&str, &str)]) -> CallGraphAnalyzer {
        let mut analyzer = CallGraphAnalyzer::new();
        for (caller, callee) in edges {
            analyzer.add_call(caller, callee);
        }
        analyzer
    }

    #[test]
    fn test_topological_sort_respects_edges() {
        let analyzer = analyzer_from(&[
            ("main", "parse"),
            ("main", "render"),
            ("parse", "lex"),
        ]);

        let order = analyzer.topological_sort().unwrap();
        assert_eq!(order.len(), 4);

        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();
        assert!(position["main"] < position["parse"]);
        assert!(position["main"] < position["render"]);
        assert!(position["parse"] < position["lex"]);
    }

    #[test]
    fn test_topological_sort_is_deterministic() {
        let analyzer = analyzer_from(&[
            ("main", "parse"),
            ("main", "render"),
            ("parse", "lex"),
        ]);

        // First-seen seeding pins the exact order, not just the partial
        // order, for a fixed insertion history.
        let expected = vec!["main", "parse", "render", "lex"];
        for _ in 0..3 {
            let order = analyzer.topological_sort().unwrap();
            assert_eq!(order, expected);
        }
    }

    #[test]
    fn test_cycle_surfaces_as_error_with_acyclic_prefix() {
        let analyzer = analyzer_from(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")]);

        let err = analyzer.topological_sort().unwrap_err();
        assert_eq!(err.total, 4);
        assert_eq!(err.ordered, vec!["d"], "only the acyclic portion orders");
        assert!(err.ordered.len() < err.total);
    }

    #[test]
    fn test_full_order_iff_no_cycles() {
        let acyclic = analyzer_from(&[("a", "b"), ("b", "c")]);
        assert!(acyclic.detect_cycles().is_empty());
        assert_eq!(
            acyclic.topological_sort().unwrap().len(),
            acyclic.function_count()
        );

        let cyclic = analyzer_from(&[("a", "b"), ("b", "a")]);
        assert!(!cyclic.detect_cycles().is_empty());
        assert!(cyclic.topological_sort().is_err());
    }

    #[test]
    fn test_detect_cycles_reports_exactly_the_component() {
        let analyzer = analyzer_from(&[("a", "b"), ("b", "c"), ("c", "a"), ("d", "a")]);

        let components = analyzer.detect_cycles();
        assert_eq!(components.len(), 1);

        let component: HashSet<&str> = components[0].iter().map(String::as_str).collect();
        assert_eq!(component, ["a", "b", "c"].into_iter().collect());
        assert!(!component.contains("d"));
    }

    #[test]
    fn test_singletons_and_self_loops_are_not_reported() {
        // "alone" has no cycle; "selfish" calls itself. Neither forms a
        // component of size >= 2.
        let analyzer = analyzer_from(&[("alone", "other"), ("selfish", "selfish")]);
        assert!(analyzer.detect_cycles().is_empty());
    }

    #[test]
    fn test_duplicate_edges_are_preserved() {
        let analyzer = analyzer_from(&[("hot", "inner"), ("hot", "inner"), ("hot", "inner")]);
        assert_eq!(analyzer.edge_count(), 3);
        assert_eq!(analyzer.function_count(), 2);

        // Kahn's must still drain the multi-edges cleanly.
        let order = analyzer.topological_sort().unwrap();
        assert_eq!(order, vec!["hot", "inner"]);
    }

    #[test]
    fn test_two_disjoint_cycles() {
        let analyzer = analyzer_from(&[("a", "b"), ("b", "a"), ("x", "y"), ("y", "x")]);

        let components = analyzer.detect_cycles();
        assert_eq!(components.len(), 2);

        let sets: Vec<HashSet<&str>> = components
            .iter()
            .map(|c| c.iter().map(String::as_str).collect())
            .collect();
        assert!(sets.contains(&["a", "b"].into_iter().collect()));
        assert!(sets.contains(&["x", "y"].into_iter().collect()));
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let mut analyzer = CallGraphAnalyzer::new();
        for i in 0..100_000u32 {
            analyzer.add_call(&format!("f{i}"), &format!("f{}", i + 1));
        }
        // Close the chain into one giant cycle.
        analyzer.add_call("f100000", "f0");

        let components = analyzer.detect_cycles();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 100_001);
        assert!(analyzer.topological_sort().is_err());
    }

    #[test]
    fn test_empty_graph() {
        let analyzer = CallGraphAnalyzer::new();
        assert_eq!(analyzer.topological_sort().unwrap(), Vec::<String>::new());
        assert!(analyzer.detect_cycles().is_empty());
        assert_eq!(analyzer.function_count(), 0);
        assert_eq!(analyzer.edge_count(), 0);
    }
}
