//! Evaluation results
//!
//! Every required label lands in exactly one of `satisfied`, `missing`,
//! `unsatisfied` or `invalid_status`, in configured order.

use serde::{Deserialize, Serialize};

/// A required label matched with at least one unrecognized token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidStatus {
    /// The required label
    pub label: String,
    /// Distinct offending tokens, in order of first appearance
    pub tokens: Vec<String>,
}

/// Categorized result of reconciling required labels against a description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    /// Labels with at least one satisfied match
    pub satisfied: Vec<String>,
    /// Labels with no matching checklist line
    pub missing: Vec<String>,
    /// Labels matched only with valid, non-satisfied statuses
    pub unsatisfied: Vec<String>,
    /// Labels matched with one or more unrecognized tokens
    pub invalid_status: Vec<InvalidStatus>,
}

impl EvaluationOutcome {
    /// Whether every required label passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.missing.is_empty() && self.unsatisfied.is_empty() && self.invalid_status.is_empty()
    }

    /// Number of required labels that failed
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.missing.len() + self.unsatisfied.len() + self.invalid_status.len()
    }

    /// Number of required labels evaluated
    #[must_use]
    pub fn required_count(&self) -> usize {
        self.satisfied.len() + self.failure_count()
    }
}

/// Final decision of a gate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The author is excluded; nothing was evaluated
    Excluded {
        /// The excluded author identity
        author: String,
    },
    /// The description was evaluated
    Evaluated(EvaluationOutcome),
}

impl GateDecision {
    /// Whether the gate passes
    #[must_use]
    pub fn passed(&self) -> bool {
        match self {
            Self::Excluded { .. } => true,
            Self::Evaluated(outcome) => outcome.passed(),
        }
    }
}
