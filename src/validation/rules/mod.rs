//! The individual check groups of the validation pipeline.
//!
//! Each rule is a pure function over the supplied collections, returning at
//! most one [`Violation`](crate::validation::error::Violation) whose message
//! merges every offender in the group.

pub(crate) mod edges;
pub(crate) mod keys;
pub(crate) mod references;
pub(crate) mod uniqueness;
