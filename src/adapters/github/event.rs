//! GitHub Actions event payload reader
//!
//! Implements `EventSource` by reading the JSON document at
//! `GITHUB_EVENT_PATH`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::core::models::PullRequest;
use crate::core::ports::EventSource;
use crate::error::GateError;

/// Environment variable holding the event payload path
pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";

/// Event source backed by a GitHub event payload file
#[derive(Debug, Clone)]
pub struct GithubEventFile {
    path: Option<PathBuf>,
}

impl GithubEventFile {
    /// Read from an explicit path, or fail with `EventPathUnset` when `None`
    #[must_use]
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Read from `GITHUB_EVENT_PATH`
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(
            std::env::var_os(EVENT_PATH_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        )
    }

    fn load(path: &Path) -> Result<Value, GateError> {
        let raw = fs::read_to_string(path).map_err(|source| GateError::EventRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| GateError::EventParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl EventSource for GithubEventFile {
    fn pull_request(&self) -> Result<PullRequest, GateError> {
        let path = self.path.as_deref().ok_or(GateError::EventPathUnset)?;
        log::debug!("Reading event payload from {}", path.display());
        pull_request_from_payload(&Self::load(path)?)
    }
}

/// Extract the pull request view from an event payload
///
/// Non-string `body` or `user.login` values read as empty strings.
pub fn pull_request_from_payload(payload: &Value) -> Result<PullRequest, GateError> {
    let pr = payload
        .get("pull_request")
        .filter(|v| v.is_object())
        .ok_or(GateError::NotPullRequest)?;

    let body = pr.get("body").and_then(Value::as_str).unwrap_or_default();
    let author = pr
        .get("user")
        .and_then(|user| user.get("login"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    Ok(PullRequest::new(body, author))
}
