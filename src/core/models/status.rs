//! Normalized checklist statuses
//!
//! The closed set every bracket token maps to, whatever vocabulary produced it.

use serde::{Deserialize, Serialize};

/// Semantic status of a checklist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizedStatus {
    /// Completed (`x`, `✔`, or `✖` when declined items pass)
    Satisfied,
    /// Explicitly not applicable (`NA`); counts as satisfied
    NotApplicable,
    /// Present but not completed (unchecked box, or a declined `✖`)
    Unsatisfied,
    /// Token outside the active vocabulary
    Invalid,
}

impl NormalizedStatus {
    /// Whether this status lets a required item pass
    #[must_use]
    pub const fn is_satisfied(self) -> bool {
        matches!(self, Self::Satisfied | Self::NotApplicable)
    }

    /// Whether this status is a recognized vocabulary member
    #[must_use]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl std::fmt::Display for NormalizedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfied => write!(f, "satisfied"),
            Self::NotApplicable => write!(f, "not_applicable"),
            Self::Unsatisfied => write!(f, "unsatisfied"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}
