//! Defines `WorkUnit`, an independent value-scoring entity.

use serde::Serialize;
use thiserror::Error;

/// Error raised by [`WorkUnit::new`] for invariants local to a single work
/// unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkUnitError {
    /// `probability_of_success` is a percentage and must lie in `[0, 100]`.
    #[error("probability_of_success must be within [0, 100], got {0}")]
    ProbabilityOutOfRange(i32),
    /// The success payoff can never be worth less than the unconditional
    /// payoff.
    #[error(
        "success_value ({success_value}) must be greater than or equal to \
         unconditional_value ({unconditional_value})"
    )]
    ValueOrdering {
        success_value: i64,
        unconditional_value: i64,
    },
}

/// A unit of work with dependencies, a success probability, and two payoff
/// amounts.
///
/// `success_value` is realized only on success; `unconditional_value` is
/// realized regardless of outcome. The blend of the two, weighted by the
/// probability of success, is the [`risk_weighted_value`](Self::risk_weighted_value).
///
/// This entity has no dependency on the graph machinery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkUnit {
    id: u32,
    /// Work units that must succeed before this one can be performed.
    dependent_on_success: Vec<u32>,
    /// Work units that must be performed first, regardless of their
    /// success status.
    dependent_on_unconditionally: Vec<u32>,
    /// Probability of success, as a percentage.
    probability_of_success: i32,
    success_value: i64,
    unconditional_value: i64,
}

impl WorkUnit {
    /// Creates a work unit, validating the probability range and the payoff
    /// ordering. Pure validation of the supplied fields.
    pub fn new(
        id: u32,
        dependent_on_success: Vec<u32>,
        dependent_on_unconditionally: Vec<u32>,
        probability_of_success: i32,
        success_value: i64,
        unconditional_value: i64,
    ) -> Result<Self, WorkUnitError> {
        if !(0..=100).contains(&probability_of_success) {
            return Err(WorkUnitError::ProbabilityOutOfRange(probability_of_success));
        }
        if success_value < unconditional_value {
            return Err(WorkUnitError::ValueOrdering {
                success_value,
                unconditional_value,
            });
        }
        Ok(Self {
            id,
            dependent_on_success,
            dependent_on_unconditionally,
            probability_of_success,
            success_value,
            unconditional_value,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn dependent_on_success(&self) -> &[u32] {
        &self.dependent_on_success
    }

    pub fn dependent_on_unconditionally(&self) -> &[u32] {
        &self.dependent_on_unconditionally
    }

    pub fn probability_of_success(&self) -> i32 {
        self.probability_of_success
    }

    pub fn success_value(&self) -> i64 {
        self.success_value
    }

    pub fn unconditional_value(&self) -> i64 {
        self.unconditional_value
    }

    /// The expected payoff: the unconditional value plus the
    /// success-contingent margin weighted by the probability of success.
    pub fn risk_weighted_value(&self) -> f64 {
        self.unconditional_value as f64
            + (self.success_value - self.unconditional_value) as f64
                * (self.probability_of_success as f64 / 100.0)
    }
}
