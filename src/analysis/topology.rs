//! Traversal algorithms over the graph's adjacency structure.
//!
//! Built after referential integrity has been checked, so every edge
//! endpoint is known to resolve to a node.

use std::collections::{HashMap, VecDeque};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction as PetDirection;

use crate::graph::Edge;

/// An adjacency index over node ids: node weights are node ids, edge
/// weights are edge ids.
#[derive(Debug)]
pub(crate) struct Topology {
    graph: DiGraph<u32, u32>,
    index_of: HashMap<u32, NodeIndex>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    None,
    Visiting, // Used for cycle detection
    Visited,
}

impl Topology {
    /// Builds the index. Edges whose endpoints are not in `node_ids` are
    /// skipped; callers run the dangling-reference check first, so on the
    /// validation path none are.
    pub(crate) fn build(node_ids: &[u32], edges: &[Edge]) -> Self {
        let mut graph = DiGraph::with_capacity(node_ids.len(), edges.len());
        let mut index_of = HashMap::with_capacity(node_ids.len());
        for &id in node_ids {
            index_of.insert(id, graph.add_node(id));
        }
        for edge in edges {
            if let (Some(&up), Some(&down)) = (
                index_of.get(&edge.upstream_node_id()),
                index_of.get(&edge.downstream_node_id()),
            ) {
                graph.add_edge(up, down, edge.id());
            }
        }
        Self { graph, index_of }
    }

    /// Searches for a directed cycle, returning the ids of its participants
    /// in path order if one exists.
    ///
    /// Depth-first search with explicit `Visiting` marking: an edge into a
    /// node currently on the traversal stack is a definitive cycle signal.
    /// The frame stack is explicit rather than the call stack, so a deep
    /// but acyclic graph cannot exhaust recursion depth.
    pub(crate) fn find_cycle(&self) -> Option<Vec<u32>> {
        let successors: Vec<Vec<NodeIndex>> = self
            .graph
            .node_indices()
            .map(|i| self.graph.neighbors(i).collect())
            .collect();
        let mut state = vec![VisitState::None; self.graph.node_count()];

        for start in self.graph.node_indices() {
            if state[start.index()] != VisitState::None {
                continue;
            }
            // Each frame is (node, cursor into its successor list).
            let mut stack: Vec<(NodeIndex, usize)> = vec![(start, 0)];
            state[start.index()] = VisitState::Visiting;

            while let Some(frame) = stack.last_mut() {
                let (node, cursor) = *frame;
                if let Some(&child) = successors[node.index()].get(cursor) {
                    frame.1 += 1;
                    match state[child.index()] {
                        VisitState::None => {
                            state[child.index()] = VisitState::Visiting;
                            stack.push((child, 0));
                        }
                        VisitState::Visiting => {
                            // The Visiting nodes are exactly the stack, so
                            // the cycle is the suffix starting at `child`.
                            let from = stack
                                .iter()
                                .position(|&(n, _)| n == child)
                                .unwrap_or(0);
                            return Some(
                                stack[from..].iter().map(|&(n, _)| self.graph[n]).collect(),
                            );
                        }
                        VisitState::Visited => {}
                    }
                } else {
                    state[node.index()] = VisitState::Visited;
                    stack.pop();
                }
            }
        }
        None
    }

    /// All node ids reachable from `id` along the given direction,
    /// excluding `id` itself, deduplicated and sorted ascending.
    ///
    /// `Incoming` walks to ancestors, `Outgoing` to descendants. Bounded
    /// breadth-first traversal; termination holds for any input because
    /// visited nodes are never re-enqueued.
    pub(crate) fn reachable(&self, id: u32, direction: PetDirection) -> Vec<u32> {
        let Some(&start) = self.index_of.get(&id) else {
            return Vec::new();
        };
        let mut visited = vec![false; self.graph.node_count()];
        visited[start.index()] = true;
        let mut queue = VecDeque::from([start]);
        let mut found = Vec::new();

        while let Some(node) = queue.pop_front() {
            for neighbor in self.graph.neighbors_directed(node, direction) {
                if !visited[neighbor.index()] {
                    visited[neighbor.index()] = true;
                    found.push(self.graph[neighbor]);
                    queue.push_back(neighbor);
                }
            }
        }
        found.sort_unstable();
        found
    }
}
