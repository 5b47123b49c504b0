//! The pull and aggregation capability contracts and their registries.
//!
//! The core implements no concrete strategy: it defines the call signature
//! every strategy must satisfy and resolves strategies by string key from
//! the registries supplied at graph construction. Registry completeness
//! (every key referenced by a node or edge exists) is checked by the
//! validation pipeline, so resolution never fails at pull time on a
//! validated graph.

use std::collections::HashMap;

use serde::Serialize;

use super::dag::Graph;
use super::edge::Edge;
use super::node::Node;

/// The direction of a pull across an edge: which end the value is read
/// from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Pulling from the upstream endpoint of the edge.
    FromUpstream,
    /// Pulling from the downstream endpoint of the edge.
    FromDownstream,
}

/// A strategy that reads from the node at one end of an edge and shapes the
/// result into the pulled-variables type `P`.
pub trait PullMethod<B, P, M, G> {
    fn pull(&self, direction: Direction, edge: &Edge, graph: &Graph<B, P, M, G>) -> P;
}

impl<B, P, M, G, F> PullMethod<B, P, M, G> for F
where
    F: Fn(Direction, &Edge, &Graph<B, P, M, G>) -> P,
{
    fn pull(&self, direction: Direction, edge: &Edge, graph: &Graph<B, P, M, G>) -> P {
        self(direction, edge, graph)
    }
}

/// A strategy that folds values pulled from multiple edges into an updated
/// node.
pub trait AggregationMethod<B, P, M> {
    fn aggregate(&self, node: &Node<B, P, M>, pulled_variables: &[P]) -> Node<B, P, M>;
}

impl<B, P, M, F> AggregationMethod<B, P, M> for F
where
    F: Fn(&Node<B, P, M>, &[P]) -> Node<B, P, M>,
{
    fn aggregate(&self, node: &Node<B, P, M>, pulled_variables: &[P]) -> Node<B, P, M> {
        self(node, pulled_variables)
    }
}

/// Registry of pull strategies, keyed by the strings edges reference.
pub type PullMethods<B, P, M, G> = HashMap<String, Box<dyn PullMethod<B, P, M, G>>>;

/// Registry of aggregation strategies, keyed by the strings nodes reference.
pub type AggMethods<B, P, M> = HashMap<String, Box<dyn AggregationMethod<B, P, M>>>;
