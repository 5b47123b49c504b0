//! Validation rule: id and name uniqueness within one entity collection.

use std::collections::BTreeMap;

use crate::graph::{Edge, Node};
use crate::validation::error::{Violation, ViolationKind};

/// Anything carrying the graph-wide `(id, name)` identity pair.
pub(crate) trait Identified {
    fn ident(&self) -> u32;
    fn label(&self) -> &str;
}

impl<B, P, M> Identified for Node<B, P, M> {
    fn ident(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Identified for Edge {
    fn ident(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

/// Checks that ids and names are each unique across `items`.
///
/// The id and name dimensions are independent, so offenders in both are
/// merged into one violation. `entity` names the collection ("node" or
/// "edge") in the message. BTreeMaps keep the report deterministic.
pub(crate) fn check_unique<T: Identified>(items: &[T], entity: &str) -> Option<Violation> {
    let mut by_id: BTreeMap<u32, Vec<(u32, String)>> = BTreeMap::new();
    let mut by_name: BTreeMap<String, Vec<(u32, String)>> = BTreeMap::new();
    for item in items {
        let pair = (item.ident(), item.label().to_string());
        by_id.entry(item.ident()).or_default().push(pair.clone());
        by_name.entry(item.label().to_string()).or_default().push(pair);
    }

    let dup_ids: BTreeMap<u32, Vec<(u32, String)>> =
        by_id.into_iter().filter(|(_, v)| v.len() > 1).collect();
    let dup_names: BTreeMap<String, Vec<(u32, String)>> =
        by_name.into_iter().filter(|(_, v)| v.len() > 1).collect();

    if dup_ids.is_empty() && dup_names.is_empty() {
        return None;
    }

    let mut parts = Vec::new();
    if !dup_ids.is_empty() {
        parts.push(format!("duplicated {entity} ids: {dup_ids:?}"));
    }
    if !dup_names.is_empty() {
        parts.push(format!("duplicated {entity} names: {dup_names:?}"));
    }
    Some(Violation {
        kind: ViolationKind::DuplicateIdentifier,
        message: parts.join("\n"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestNode = Node<(), (), ()>;

    fn node(id: u32, name: &str) -> TestNode {
        Node::new(id, name, (), (), (), "fold", "fold")
    }

    #[test]
    fn unique_items_pass() {
        let nodes = vec![node(0, "node00"), node(1, "node01")];
        assert_eq!(check_unique(&nodes, "node"), None);
    }

    #[test]
    fn duplicated_ids_are_reported_with_both_offenders() {
        let nodes = vec![node(0, "node00"), node(0, "node1000")];
        let violation = check_unique(&nodes, "node").unwrap();
        assert_eq!(violation.kind, ViolationKind::DuplicateIdentifier);
        assert_eq!(
            violation.message,
            "duplicated node ids: {0: [(0, \"node00\"), (0, \"node1000\")]}"
        );
    }

    #[test]
    fn duplicated_names_are_reported_with_both_offenders() {
        let nodes = vec![node(0, "node00"), node(1000, "node00")];
        let violation = check_unique(&nodes, "node").unwrap();
        assert_eq!(
            violation.message,
            "duplicated node names: {\"node00\": [(0, \"node00\"), (1000, \"node00\")]}"
        );
    }

    #[test]
    fn duplicated_ids_and_names_are_merged_into_one_violation() {
        let nodes = vec![node(0, "node00"), node(0, "node00")];
        let violation = check_unique(&nodes, "node").unwrap();
        assert!(violation.message.contains("duplicated node ids"));
        assert!(violation.message.contains("duplicated node names"));
    }
}
