//! Validation rule: every referenced method key resolves in its registry.

use std::collections::HashSet;

use crate::graph::{Edge, Node};
use crate::validation::error::{Violation, ViolationKind};

/// Checks that every edge's upstream and downstream pull keys exist in the
/// pull-method registry. The two directions are merged into one violation.
pub(crate) fn check_pull_keys(edges: &[Edge], keys: &HashSet<&str>) -> Option<Violation> {
    let missing_upstream: Vec<(u32, String, String)> = edges
        .iter()
        .filter(|e| !keys.contains(e.upstream_method_key()))
        .map(|e| (e.id(), e.name().to_string(), e.upstream_method_key().to_string()))
        .collect();
    let missing_downstream: Vec<(u32, String, String)> = edges
        .iter()
        .filter(|e| !keys.contains(e.downstream_method_key()))
        .map(|e| (e.id(), e.name().to_string(), e.downstream_method_key().to_string()))
        .collect();

    merged(
        "edges with unresolved upstream pull keys",
        missing_upstream,
        "edges with unresolved downstream pull keys",
        missing_downstream,
    )
}

/// Checks that every node's two aggregation keys exist in the
/// aggregation-method registry. The two directions are merged into one
/// violation.
pub(crate) fn check_agg_keys<B, P, M>(
    nodes: &[Node<B, P, M>],
    keys: &HashSet<&str>,
) -> Option<Violation> {
    let missing_downstream: Vec<(u32, String, String)> = nodes
        .iter()
        .filter(|n| !keys.contains(n.pull_from_downstream_agg_key.as_str()))
        .map(|n| (n.id, n.name.clone(), n.pull_from_downstream_agg_key.clone()))
        .collect();
    let missing_upstream: Vec<(u32, String, String)> = nodes
        .iter()
        .filter(|n| !keys.contains(n.pull_from_upstream_agg_key.as_str()))
        .map(|n| (n.id, n.name.clone(), n.pull_from_upstream_agg_key.clone()))
        .collect();

    merged(
        "nodes with unresolved downstream aggregation keys",
        missing_downstream,
        "nodes with unresolved upstream aggregation keys",
        missing_upstream,
    )
}

fn merged(
    first_label: &str,
    first: Vec<(u32, String, String)>,
    second_label: &str,
    second: Vec<(u32, String, String)>,
) -> Option<Violation> {
    if first.is_empty() && second.is_empty() {
        return None;
    }
    let mut parts = Vec::new();
    if !first.is_empty() {
        parts.push(format!("{first_label}: {first:?}"));
    }
    if !second.is_empty() {
        parts.push(format!("{second_label}: {second:?}"));
    }
    Some(Violation {
        kind: ViolationKind::UnresolvedMethodKey,
        message: parts.join("\n"),
    })
}
