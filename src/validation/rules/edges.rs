//! Validation rule: no duplicate or bidirectional edge pairs.

use std::collections::HashSet;

use crate::graph::Edge;
use crate::validation::error::{Violation, ViolationKind};

/// Checks for duplicate edges in the same direction and for reverse-pair
/// (bidirectional) edges.
///
/// A bidirectional pair is a 2-cycle, so it already violates acyclicity;
/// it is still reported here, as the more specific and actionable message,
/// rather than left to the general cycle check.
pub(crate) fn check_edge_pairs(edges: &[Edge]) -> Option<Violation> {
    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut same_direction: Vec<(u32, String)> = Vec::new();
    let mut bidirectional: Vec<(u32, String)> = Vec::new();

    for edge in edges {
        let forward = (edge.upstream_node_id(), edge.downstream_node_id());
        let reverse = (forward.1, forward.0);

        if !seen.insert(forward) {
            same_direction.push((edge.id(), edge.name().to_string()));
        }
        if seen.contains(&reverse) {
            bidirectional.push((edge.id(), edge.name().to_string()));
        }
    }

    if same_direction.is_empty() && bidirectional.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if !same_direction.is_empty() {
        parts.push(format!(
            "duplicate edges in the same direction: {same_direction:?}"
        ));
    }
    if !bidirectional.is_empty() {
        parts.push(format!(
            "bidirectional edge pairs (violates acyclicity): {bidirectional:?}"
        ));
    }
    Some(Violation {
        kind: ViolationKind::StructuralViolation,
        message: parts.join("\n"),
    })
}
