//! pullgraph: a validated directed-acyclic-graph core with bidirectional
//! data pulling between neighboring nodes via pluggable, string-keyed
//! strategies.
//!
//! The crate is split by concern:
//! - [`graph`]: the value entities (`Node`, `Edge`), the `Graph` aggregate
//!   root, and the pull/aggregation capability contracts.
//! - [`validation`]: the construction-time validation pipeline and its
//!   structured violation records.
//! - `analysis`: internal traversal algorithms (cycle detection,
//!   reachability) over the validated topology.
//! - [`work_unit`]: an independent value-scoring entity.
//!
//! A `Graph` is validated once, at construction, and is structurally
//! immutable afterwards. The only mutable state post-construction is
//! per-node pulled data, updated by the caller through the aggregation
//! strategies the graph resolves by key.

pub mod graph;
pub mod validation;
pub mod work_unit;

mod analysis;

pub use graph::{
    AggMethods, AggregationMethod, Direction, Edge, EdgeError, Graph, Node, PullMethod,
    PullMethods,
};
pub use validation::{GraphError, GraphWarning, Violation, ViolationKind};
pub use work_unit::{WorkUnit, WorkUnitError};
