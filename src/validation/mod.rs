//! Construction-time validation: check groups, structured violations, and
//! the non-fatal warning channel.
pub mod error;

pub(crate) mod rules;
pub(crate) mod validator;

pub use error::{GraphError, GraphWarning, Violation, ViolationKind};
