//! Validation rule: edge endpoints reference nodes that exist.

use std::collections::HashSet;

use crate::graph::Edge;
use crate::validation::error::{Violation, ViolationKind};

/// Checks that every edge's upstream and downstream node ids are present in
/// the graph's node set. Both endpoints are merged into one violation.
pub(crate) fn check_edge_endpoints(
    node_ids: &HashSet<u32>,
    edges: &[Edge],
) -> Option<Violation> {
    let invalid_upstream: Vec<(u32, String, u32)> = edges
        .iter()
        .filter(|e| !node_ids.contains(&e.upstream_node_id()))
        .map(|e| (e.id(), e.name().to_string(), e.upstream_node_id()))
        .collect();
    let invalid_downstream: Vec<(u32, String, u32)> = edges
        .iter()
        .filter(|e| !node_ids.contains(&e.downstream_node_id()))
        .map(|e| (e.id(), e.name().to_string(), e.downstream_node_id()))
        .collect();

    if invalid_upstream.is_empty() && invalid_downstream.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if !invalid_upstream.is_empty() {
        parts.push(format!(
            "edges with invalid upstream node ids: {invalid_upstream:?}"
        ));
    }
    if !invalid_downstream.is_empty() {
        parts.push(format!(
            "edges with invalid downstream node ids: {invalid_downstream:?}"
        ));
    }
    Some(Violation {
        kind: ViolationKind::DanglingReference,
        message: parts.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(id: u32, name: &str, up: u32, down: u32) -> Edge {
        Edge::new(id, name, up, down, "get", "get").unwrap()
    }

    fn ids(entries: &[u32]) -> HashSet<u32> {
        entries.iter().copied().collect()
    }

    #[test]
    fn valid_endpoints_pass() {
        let edges = vec![edge(10, "edge_node00->node01", 0, 1)];
        assert_eq!(check_edge_endpoints(&ids(&[0, 1]), &edges), None);
    }

    #[test]
    fn dangling_upstream_endpoint_is_reported() {
        let edges = vec![edge(10, "edge_node00->node01", 999, 1)];
        let violation = check_edge_endpoints(&ids(&[0, 1]), &edges).unwrap();
        assert_eq!(violation.kind, ViolationKind::DanglingReference);
        assert_eq!(
            violation.message,
            "edges with invalid upstream node ids: [(10, \"edge_node00->node01\", 999)]"
        );
    }

    #[test]
    fn dangling_endpoints_on_both_ends_are_merged() {
        let edges = vec![edge(10, "edge_node00->node01", 998, 999)];
        let violation = check_edge_endpoints(&ids(&[0, 1]), &edges).unwrap();
        assert!(violation.message.contains("invalid upstream node ids: [(10, \"edge_node00->node01\", 998)]"));
        assert!(violation.message.contains("invalid downstream node ids: [(10, \"edge_node00->node01\", 999)]"));
    }
}
