//! Internal traversal algorithms over the validated node/edge collections.
pub(crate) mod topology;
