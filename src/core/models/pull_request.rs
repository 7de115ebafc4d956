//! Pull request as seen by the gate

use serde::{Deserialize, Serialize};

/// The two pull request fields the gate reads
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// Description text; empty when absent
    pub body: String,
    /// Author login; empty when absent
    pub author: String,
}

impl PullRequest {
    /// Create a pull request view
    pub fn new(body: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            author: author.into(),
        }
    }
}
