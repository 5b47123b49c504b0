//! Defines the `Node` type, a single vertex of the pull graph.

use serde::Serialize;

use super::methods::Direction;

/// A vertex in the graph, generic over its payload shapes.
///
/// `B` is the shape of the variables the node owns intrinsically, `P` the
/// shape of the variables populated by pulling from neighbors, and `M` the
/// shape of descriptive metadata. Structural validation never inspects the
/// payloads, so the same graph machinery serves any domain.
///
/// `id` and `name` must each be unique within a graph; that invariant is
/// graph-level and enforced by [`Graph::new`](super::dag::Graph::new), not
/// here. After a graph is built, only the pulled state of a node
/// (`pulled_variables` and the two `pulled_from_*` flags) is meant to
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node<B, P, M> {
    pub id: u32,
    pub name: String,
    pub base_variables: B,
    pub pulled_variables: P,
    pub metadata: M,
    /// Key into the graph's aggregation registry, used when folding values
    /// pulled from downstream neighbors into this node.
    pub pull_from_downstream_agg_key: String,
    /// Same, for values pulled from upstream neighbors.
    pub pull_from_upstream_agg_key: String,
    pub pulled_from_downstream: bool,
    pub pulled_from_upstream: bool,
}

impl<B, P, M> Node<B, P, M> {
    /// Creates a node with both pulled flags cleared.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        base_variables: B,
        pulled_variables: P,
        metadata: M,
        pull_from_downstream_agg_key: impl Into<String>,
        pull_from_upstream_agg_key: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            base_variables,
            pulled_variables,
            metadata,
            pull_from_downstream_agg_key: pull_from_downstream_agg_key.into(),
            pull_from_upstream_agg_key: pull_from_upstream_agg_key.into(),
            pulled_from_downstream: false,
            pulled_from_upstream: false,
        }
    }

    /// The aggregation key this node uses for values pulled from the given
    /// direction.
    pub fn agg_key(&self, direction: Direction) -> &str {
        match direction {
            Direction::FromDownstream => &self.pull_from_downstream_agg_key,
            Direction::FromUpstream => &self.pull_from_upstream_agg_key,
        }
    }

    /// Records that a pull has occurred from the given direction.
    pub fn mark_pulled(&mut self, direction: Direction) {
        match direction {
            Direction::FromDownstream => self.pulled_from_downstream = true,
            Direction::FromUpstream => self.pulled_from_upstream = true,
        }
    }
}
