//! Defines the `Edge` type, a directed connection between two nodes.

use serde::Serialize;
use thiserror::Error;

use super::methods::Direction;

/// Error raised by [`Edge::new`] for invariants local to a single edge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdgeError {
    /// An edge may not connect a node to itself.
    #[error("edge ({id}, {name:?}) connects node {node_id} to itself")]
    SelfLoop { id: u32, name: String, node_id: u32 },
}

/// A directed connection from an upstream node to a downstream node.
///
/// Each direction of the edge carries the key of the pull strategy to use
/// when pulling from that end. Fields are crate-private so the self-loop
/// invariant checked by [`Edge::new`] cannot be bypassed after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) upstream_node_id: u32,
    pub(crate) downstream_node_id: u32,
    pub(crate) upstream_method_key: String,
    pub(crate) downstream_method_key: String,
}

impl Edge {
    /// Creates an edge, rejecting self-loops.
    ///
    /// This check is local to the edge and independent of any graph
    /// context; referential integrity against a node set is the graph's
    /// responsibility.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        upstream_node_id: u32,
        downstream_node_id: u32,
        upstream_method_key: impl Into<String>,
        downstream_method_key: impl Into<String>,
    ) -> Result<Self, EdgeError> {
        let name = name.into();
        if upstream_node_id == downstream_node_id {
            return Err(EdgeError::SelfLoop {
                id,
                name,
                node_id: upstream_node_id,
            });
        }
        Ok(Self {
            id,
            name,
            upstream_node_id,
            downstream_node_id,
            upstream_method_key: upstream_method_key.into(),
            downstream_method_key: downstream_method_key.into(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn upstream_node_id(&self) -> u32 {
        self.upstream_node_id
    }

    pub fn downstream_node_id(&self) -> u32 {
        self.downstream_node_id
    }

    pub fn upstream_method_key(&self) -> &str {
        &self.upstream_method_key
    }

    pub fn downstream_method_key(&self) -> &str {
        &self.downstream_method_key
    }

    /// The node id at the end of the edge a pull reads from.
    pub fn endpoint(&self, direction: Direction) -> u32 {
        match direction {
            Direction::FromUpstream => self.upstream_node_id,
            Direction::FromDownstream => self.downstream_node_id,
        }
    }

    /// The pull strategy key for the given direction.
    pub fn method_key(&self, direction: Direction) -> &str {
        match direction {
            Direction::FromUpstream => &self.upstream_method_key,
            Direction::FromDownstream => &self.downstream_method_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_connects_two_distinct_nodes() {
        let edge = Edge::new(10, "edge_node00->node01", 0, 1, "get", "get").unwrap();
        assert_eq!(edge.endpoint(Direction::FromUpstream), 0);
        assert_eq!(edge.endpoint(Direction::FromDownstream), 1);
        assert_eq!(edge.method_key(Direction::FromUpstream), "get");
    }

    #[test]
    fn edges_serialize_with_their_method_keys() {
        let edge = Edge::new(10, "edge_node00->node01", 0, 1, "get_up", "get_down").unwrap();
        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(value["upstream_node_id"], 0);
        assert_eq!(value["downstream_node_id"], 1);
        assert_eq!(value["upstream_method_key"], "get_up");
        assert_eq!(value["downstream_method_key"], "get_down");
    }

    #[test]
    fn self_loop_is_rejected_at_construction() {
        let err = Edge::new(10, "loop", 3, 3, "get", "get").unwrap_err();
        assert_eq!(
            err,
            EdgeError::SelfLoop {
                id: 10,
                name: "loop".to_string(),
                node_id: 3,
            }
        );
        assert!(err.to_string().contains("connects node 3 to itself"));
    }
}
