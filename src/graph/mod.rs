//! Defines the core data structures for the pull graph.
pub mod dag;
pub mod edge;
pub mod methods;
pub mod node;

// Re-export key types for convenient access
pub use dag::Graph;
pub use edge::{Edge, EdgeError};
pub use methods::{AggMethods, AggregationMethod, Direction, PullMethod, PullMethods};
pub use node::Node;
