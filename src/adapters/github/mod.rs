//! GitHub Actions integration
//!
//! - [`event`] - Pull request event payload reader
//! - [`annotations`] - Workflow command formatting

pub mod annotations;
pub mod event;

pub use annotations::error_annotation;
pub use event::{EVENT_PATH_VAR, GithubEventFile, pull_request_from_payload};

/// Whether the process runs inside GitHub Actions
#[must_use]
pub fn running_in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}
