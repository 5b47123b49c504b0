//! The central validator that orchestrates the construction-time checks.

use std::collections::HashSet;

use crate::analysis::topology::Topology;
use crate::graph::{Edge, Node};
use crate::validation::error::{GraphError, GraphWarning, Violation, ViolationKind};
use crate::validation::rules::{edges, keys, references, uniqueness};

/// The outcome of a clean validation pass: the non-fatal advisories plus
/// the adjacency index the checks already built, handed back so the graph
/// can reuse it for its derived caches.
#[derive(Debug)]
pub(crate) struct Validated {
    pub(crate) warnings: Vec<GraphWarning>,
    pub(crate) topology: Topology,
}

/// Runs every check group, collecting all violations rather than stopping
/// at the first failing group.
///
/// Group order matches the dependency between checks: the structural and
/// referential groups are independent of one another and all run; the
/// acyclicity check runs only once those are clean, because adjacency is
/// not meaningful while an edge endpoint dangles. Orphan detection is the
/// single non-fatal observation and never aborts construction.
pub(crate) fn validate<B, P, M>(
    nodes: &[Node<B, P, M>],
    edges_in: &[Edge],
    pull_keys: &HashSet<&str>,
    agg_keys: &HashSet<&str>,
) -> Result<Validated, GraphError> {
    let mut violations: Vec<Violation> = Vec::new();

    violations.extend(uniqueness::check_unique(nodes, "node"));
    violations.extend(uniqueness::check_unique(edges_in, "edge"));
    violations.extend(edges::check_edge_pairs(edges_in));
    violations.extend(keys::check_pull_keys(edges_in, pull_keys));
    violations.extend(keys::check_agg_keys(nodes, agg_keys));

    let node_ids: Vec<u32> = nodes.iter().map(|n| n.id).collect();
    let id_set: HashSet<u32> = node_ids.iter().copied().collect();
    violations.extend(references::check_edge_endpoints(&id_set, edges_in));

    let warnings = orphaned_nodes(nodes, edges_in);

    if !violations.is_empty() {
        return Err(GraphError { violations });
    }

    let topology = Topology::build(&node_ids, edges_in);
    if let Some(cycle) = topology.find_cycle() {
        violations.push(Violation {
            kind: ViolationKind::CycleDetected,
            message: format!("cycle detected involving nodes {cycle:?}"),
        });
        return Err(GraphError { violations });
    }

    Ok(Validated { warnings, topology })
}

/// Nodes touched by no edge at all, surfaced as a warning.
fn orphaned_nodes<B, P, M>(nodes: &[Node<B, P, M>], edges_in: &[Edge]) -> Vec<GraphWarning> {
    let touched: HashSet<u32> = edges_in
        .iter()
        .flat_map(|e| [e.upstream_node_id(), e.downstream_node_id()])
        .collect();
    let orphaned: Vec<(u32, String)> = nodes
        .iter()
        .filter(|n| !touched.contains(&n.id))
        .map(|n| (n.id, n.name.clone()))
        .collect();

    if orphaned.is_empty() {
        Vec::new()
    } else {
        vec![GraphWarning::OrphanedNodes(orphaned)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestNode = Node<(), (), ()>;

    fn node(id: u32, name: &str) -> TestNode {
        Node::new(id, name, (), (), (), "fold", "fold")
    }

    fn edge(id: u32, name: &str, up: u32, down: u32) -> Edge {
        Edge::new(id, name, up, down, "get", "get").unwrap()
    }

    fn pull_keys() -> HashSet<&'static str> {
        ["get"].into_iter().collect()
    }

    fn agg_keys() -> HashSet<&'static str> {
        ["fold"].into_iter().collect()
    }

    #[test]
    fn clean_input_passes_with_no_warnings() {
        let nodes = vec![node(0, "node00"), node(1, "node01")];
        let edges_in = vec![edge(10, "edge_node00->node01", 0, 1)];
        let validated = validate(&nodes, &edges_in, &pull_keys(), &agg_keys()).unwrap();
        assert!(validated.warnings.is_empty());
    }

    #[test]
    fn validation_outcome_is_debug_printable() {
        // Both arms of the result must format; tests assert through
        // unwrap/unwrap_err, which needs this.
        let nodes = vec![node(0, "node00"), node(1, "node01")];
        let edges_in = vec![edge(10, "edge_node00->node01", 0, 1)];
        let outcome = validate(&nodes, &edges_in, &pull_keys(), &agg_keys());
        assert!(format!("{outcome:?}").contains("Validated"));
    }

    #[test]
    fn violations_from_independent_groups_are_all_collected() {
        // Duplicate node id, unresolved agg key, and a dangling endpoint at
        // the same time: every group reports.
        let nodes = vec![
            node(0, "node00"),
            node(0, "node1000"),
            Node::new(1, "node01", (), (), (), "missing_agg", "fold"),
        ];
        let edges_in = vec![edge(10, "edge_node00->node999", 0, 999)];
        let err = validate(&nodes, &edges_in, &pull_keys(), &agg_keys()).unwrap_err();

        let kinds: Vec<ViolationKind> = err.violations.iter().map(|v| v.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationKind::DuplicateIdentifier,
                ViolationKind::UnresolvedMethodKey,
                ViolationKind::DanglingReference,
            ]
        );
    }

    #[test]
    fn cycle_check_runs_only_on_structurally_clean_input() {
        // The dangling endpoint keeps the acyclicity check from running.
        let nodes = vec![node(0, "node00"), node(1, "node01")];
        let edges_in = vec![
            edge(10, "edge_node00->node01", 0, 1),
            edge(20, "edge_node01->node999", 1, 999),
        ];
        let err = validate(&nodes, &edges_in, &pull_keys(), &agg_keys()).unwrap_err();
        assert!(err
            .violations
            .iter()
            .all(|v| v.kind != ViolationKind::CycleDetected));
    }

    #[test]
    fn two_cycle_is_reported_as_structural_not_cycle() {
        // The specific bidirectional check is authoritative over the
        // general cycle check.
        let nodes = vec![node(0, "node00"), node(1, "node01")];
        let edges_in = vec![
            edge(10, "edge_node00->node01", 0, 1),
            edge(20, "edge_node01->node00", 1, 0),
        ];
        let err = validate(&nodes, &edges_in, &pull_keys(), &agg_keys()).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].kind, ViolationKind::StructuralViolation);
    }

    #[test]
    fn three_node_cycle_is_fatal() {
        let nodes = vec![node(0, "node00"), node(1, "node01"), node(2, "node02")];
        let edges_in = vec![
            edge(10, "edge_node00->node01", 0, 1),
            edge(20, "edge_node01->node02", 1, 2),
            edge(30, "edge_node02->node00", 2, 0),
        ];
        let err = validate(&nodes, &edges_in, &pull_keys(), &agg_keys()).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].kind, ViolationKind::CycleDetected);
        assert!(err.violations[0].message.contains("cycle detected involving nodes"));
    }

    #[test]
    fn orphaned_node_is_a_warning_not_a_violation() {
        let nodes = vec![node(0, "node00")];
        let validated = validate(&nodes, &[], &pull_keys(), &agg_keys()).unwrap();
        assert_eq!(
            validated.warnings,
            vec![GraphWarning::OrphanedNodes(vec![(0, "node00".to_string())])]
        );
    }
}
