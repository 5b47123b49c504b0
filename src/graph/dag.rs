//! The `Graph` aggregate root: validated construction and derived indices.

use std::collections::{HashMap, HashSet};
use std::fmt;

use petgraph::Direction::{Incoming, Outgoing};

use crate::validation::error::{GraphError, GraphWarning};
use crate::validation::validator::{self, Validated};

use super::edge::Edge;
use super::methods::{AggMethods, AggregationMethod, Direction, PullMethod, PullMethods};
use super::node::Node;

/// A directed acyclic graph of [`Node`]s connected by [`Edge`]s, with
/// string-keyed pull and aggregation strategy registries.
///
/// Every structural invariant is enforced once, by [`Graph::new`]:
/// - node ids and names unique; edge ids and names unique,
/// - no duplicate or bidirectional edge pairs,
/// - every referenced pull/aggregation key resolves in its registry,
/// - every edge endpoint references an existing node,
/// - no directed cycle of any length.
///
/// The structure is immutable after construction, so the derived indices
/// (id lookups, root/leaf sets, ancestor/descendant maps) are computed once
/// here and cached for the graph's lifetime with no invalidation logic.
/// The only post-construction mutation point is [`Graph::commit_pulled`],
/// which takes a node's pulled state and nothing else.
pub struct Graph<B, P, M, G> {
    nodes: Vec<Node<B, P, M>>,
    edges: Vec<Edge>,
    global_context: G,
    pull_methods: PullMethods<B, P, M, G>,
    agg_methods: AggMethods<B, P, M>,
    warnings: Vec<GraphWarning>,

    // Derived indices, frozen at construction.
    node_ids: Vec<u32>,
    edge_ids: Vec<u32>,
    node_index: HashMap<u32, usize>,
    edge_index: HashMap<u32, usize>,
    root_node_ids: Vec<u32>,
    leaf_node_ids: Vec<u32>,
    ancestors: HashMap<u32, Vec<u32>>,
    descendants: HashMap<u32, Vec<u32>>,
}

impl<B, P, M, G> Graph<B, P, M, G> {
    /// Validates and builds a graph, or reports every violation the
    /// pipeline could detect in one aggregated [`GraphError`].
    ///
    /// Orphaned nodes (touched by no edge) do not fail construction; they
    /// are recorded in [`Graph::warnings`] and emitted via `log::warn!`.
    pub fn new(
        nodes: Vec<Node<B, P, M>>,
        edges: Vec<Edge>,
        global_context: G,
        pull_methods: PullMethods<B, P, M, G>,
        agg_methods: AggMethods<B, P, M>,
    ) -> Result<Self, GraphError> {
        let pull_keys: HashSet<&str> = pull_methods.keys().map(String::as_str).collect();
        let agg_keys: HashSet<&str> = agg_methods.keys().map(String::as_str).collect();
        let Validated { warnings, topology } =
            validator::validate(&nodes, &edges, &pull_keys, &agg_keys)?;

        for warning in &warnings {
            log::warn!("{warning}");
        }

        let mut node_ids: Vec<u32> = nodes.iter().map(|n| n.id).collect();
        node_ids.sort_unstable();
        let mut edge_ids: Vec<u32> = edges.iter().map(|e| e.id()).collect();
        edge_ids.sort_unstable();

        let node_index: HashMap<u32, usize> =
            nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();
        let edge_index: HashMap<u32, usize> =
            edges.iter().enumerate().map(|(i, e)| (e.id(), i)).collect();

        // Roots never appear as a downstream endpoint, leaves never as an
        // upstream endpoint. Derived from the edge set alone, so the result
        // is independent of input ordering.
        let downstream_endpoints: HashSet<u32> =
            edges.iter().map(|e| e.downstream_node_id()).collect();
        let upstream_endpoints: HashSet<u32> =
            edges.iter().map(|e| e.upstream_node_id()).collect();
        let root_node_ids: Vec<u32> = node_ids
            .iter()
            .copied()
            .filter(|id| !downstream_endpoints.contains(id))
            .collect();
        let leaf_node_ids: Vec<u32> = node_ids
            .iter()
            .copied()
            .filter(|id| !upstream_endpoints.contains(id))
            .collect();

        // The acyclicity check has already proven the topology finite to
        // traverse, so full reachability is total.
        let ancestors: HashMap<u32, Vec<u32>> = node_ids
            .iter()
            .map(|&id| (id, topology.reachable(id, Incoming)))
            .collect();
        let descendants: HashMap<u32, Vec<u32>> = node_ids
            .iter()
            .map(|&id| (id, topology.reachable(id, Outgoing)))
            .collect();

        Ok(Self {
            nodes,
            edges,
            global_context,
            pull_methods,
            agg_methods,
            warnings,
            node_ids,
            edge_ids,
            node_index,
            edge_index,
            root_node_ids,
            leaf_node_ids,
            ancestors,
            descendants,
        })
    }

    // --- Original inputs ---

    pub fn nodes(&self) -> &[Node<B, P, M>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn global_context(&self) -> &G {
        &self.global_context
    }

    pub fn pull_methods(&self) -> &PullMethods<B, P, M, G> {
        &self.pull_methods
    }

    pub fn agg_methods(&self) -> &AggMethods<B, P, M> {
        &self.agg_methods
    }

    /// Non-fatal advisories collected during construction.
    pub fn warnings(&self) -> &[GraphWarning] {
        &self.warnings
    }

    // --- Derived indices ---

    /// All node ids, ascending.
    pub fn node_ids(&self) -> &[u32] {
        &self.node_ids
    }

    /// All edge ids, ascending.
    pub fn edge_ids(&self) -> &[u32] {
        &self.edge_ids
    }

    pub fn node(&self, id: u32) -> Option<&Node<B, P, M>> {
        self.node_index.get(&id).map(|&i| &self.nodes[i])
    }

    /// Absorbs the pulled state of `updated` into the stored node with the
    /// same id. Returns `false` for an unknown id.
    ///
    /// Aggregation strategies return an updated node; the graph takes only
    /// its `pulled_variables` and `pulled_from_*` flags. The structural
    /// fields (`id`, `name`, the aggregation keys) of the stored node never
    /// change, because the derived indices and the validated key references
    /// are keyed on them and are never recomputed.
    pub fn commit_pulled(&mut self, updated: Node<B, P, M>) -> bool {
        match self.node_index.get(&updated.id) {
            Some(&i) => {
                let stored = &mut self.nodes[i];
                stored.pulled_variables = updated.pulled_variables;
                stored.pulled_from_downstream = updated.pulled_from_downstream;
                stored.pulled_from_upstream = updated.pulled_from_upstream;
                true
            }
            None => false,
        }
    }

    pub fn edge(&self, id: u32) -> Option<&Edge> {
        self.edge_index.get(&id).map(|&i| &self.edges[i])
    }

    /// Ids of nodes with no incoming edge, ascending.
    pub fn root_node_ids(&self) -> &[u32] {
        &self.root_node_ids
    }

    /// Ids of nodes with no outgoing edge, ascending.
    pub fn leaf_node_ids(&self) -> &[u32] {
        &self.leaf_node_ids
    }

    /// Nodes with no incoming edge, in ascending id order.
    pub fn root_nodes(&self) -> Vec<&Node<B, P, M>> {
        self.root_node_ids.iter().filter_map(|&id| self.node(id)).collect()
    }

    /// Nodes with no outgoing edge, in ascending id order.
    pub fn leaf_nodes(&self) -> Vec<&Node<B, P, M>> {
        self.leaf_node_ids.iter().filter_map(|&id| self.node(id)).collect()
    }

    /// All node ids reachable by following edges backward from `id`,
    /// deduplicated and ascending. `None` for an unknown id.
    pub fn ancestors(&self, id: u32) -> Option<&[u32]> {
        self.ancestors.get(&id).map(Vec::as_slice)
    }

    /// All node ids reachable by following edges forward from `id`,
    /// deduplicated and ascending. `None` for an unknown id.
    pub fn descendants(&self, id: u32) -> Option<&[u32]> {
        self.descendants.get(&id).map(Vec::as_slice)
    }

    // --- Registry resolution ---

    pub fn pull_method(&self, key: &str) -> Option<&dyn PullMethod<B, P, M, G>> {
        self.pull_methods.get(key).map(Box::as_ref)
    }

    pub fn agg_method(&self, key: &str) -> Option<&dyn AggregationMethod<B, P, M>> {
        self.agg_methods.get(key).map(Box::as_ref)
    }

    /// Resolves the pull strategy an edge names for the given direction.
    /// Always `Some` on a validated graph; key completeness is a
    /// construction invariant.
    pub fn pull_method_for(
        &self,
        edge: &Edge,
        direction: Direction,
    ) -> Option<&dyn PullMethod<B, P, M, G>> {
        self.pull_method(edge.method_key(direction))
    }

    /// Resolves the aggregation strategy a node names for the given
    /// direction. Always `Some` on a validated graph.
    pub fn agg_method_for(
        &self,
        node: &Node<B, P, M>,
        direction: Direction,
    ) -> Option<&dyn AggregationMethod<B, P, M>> {
        self.agg_method(node.agg_key(direction))
    }
}

impl<B, P, M, G> fmt::Debug for Graph<B, P, M, G>
where
    B: fmt::Debug,
    P: fmt::Debug,
    M: fmt::Debug,
    G: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pull_keys: Vec<&str> = self.pull_methods.keys().map(String::as_str).collect();
        pull_keys.sort_unstable();
        let mut agg_keys: Vec<&str> = self.agg_methods.keys().map(String::as_str).collect();
        agg_keys.sort_unstable();
        f.debug_struct("Graph")
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .field("global_context", &self.global_context)
            .field("pull_methods", &pull_keys)
            .field("agg_methods", &agg_keys)
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}
