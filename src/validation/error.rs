//! Defines the error and warning types for the validation pipeline.

use std::fmt;

use thiserror::Error;

/// The specific category of a structural violation, for programmatic
/// inspection without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Duplicated id and/or name among nodes or among edges.
    DuplicateIdentifier,
    /// A duplicate edge in the same direction, or a bidirectional edge pair.
    StructuralViolation,
    /// An edge or node references a pull/aggregation key absent from the
    /// corresponding registry.
    UnresolvedMethodKey,
    /// An edge references a node id not present in the graph's node set.
    DanglingReference,
    /// The node/edge set contains a directed cycle.
    CycleDetected,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ViolationKind::DuplicateIdentifier => "DuplicateIdentifier",
            ViolationKind::StructuralViolation => "StructuralViolation",
            ViolationKind::UnresolvedMethodKey => "UnresolvedMethodKey",
            ViolationKind::DanglingReference => "DanglingReference",
            ViolationKind::CycleDetected => "CycleDetected",
        };
        f.write_str(label)
    }
}

/// A structured violation record from one check group.
///
/// Each check group merges every offender it finds into a single record, so
/// a caller fixing one dimension of a group (say, duplicated ids) sees the
/// other dimension (duplicated names) at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Aggregated construction failure: every violation the pipeline could
/// detect, across all check groups.
///
/// Construction fails atomically; no partially validated graph is
/// observable. The failure is a deterministic function of the input, so
/// retrying without changing the input recurs identically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("graph validation failed with {} violation(s):\n{}", .violations.len(), render(.violations))]
pub struct GraphError {
    pub violations: Vec<Violation>,
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("- {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A non-fatal advisory attached to a successfully constructed graph.
///
/// Warnings travel on a side channel distinct from [`GraphError`]: they
/// never abort construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphWarning {
    /// Nodes touched by no edge at all, as `(id, name)` pairs.
    OrphanedNodes(Vec<(u32, String)>),
}

impl fmt::Display for GraphWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphWarning::OrphanedNodes(nodes) => {
                write!(f, "nodes with no edges (orphaned): {nodes:?}")
            }
        }
    }
}
