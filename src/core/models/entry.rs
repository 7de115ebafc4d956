//! Parsed checklist line

use serde::{Deserialize, Serialize};

/// A checklist line split into its label and raw bracket token
///
/// `- [x] Tests added` becomes `{ label: "Tests added", status_token: "x" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistEntry {
    /// Trimmed text after the bracket; never empty
    pub label: String,
    /// Bracket contents exactly as written, possibly empty or whitespace
    pub status_token: String,
}

impl ChecklistEntry {
    /// Create a new entry
    pub fn new(label: impl Into<String>, status_token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            status_token: status_token.into(),
        }
    }
}
