//! Triggering event port

use crate::core::models::PullRequest;
use crate::error::GateError;

/// Source of the pull request that triggered the run
pub trait EventSource {
    /// Read the pull request description and author
    fn pull_request(&self) -> Result<PullRequest, GateError>;
}
