//! Fatal input errors
//!
//! These describe a misconfigured host, not a failing checklist. Checklist
//! violations are never errors; they are reported through
//! [`EvaluationOutcome`](crate::core::models::EvaluationOutcome).

use std::path::PathBuf;

/// An input problem that aborts the run before or instead of evaluation
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// No event path was given and `GITHUB_EVENT_PATH` is unset
    #[error("GITHUB_EVENT_PATH is not set. Cannot read event payload.")]
    EventPathUnset,

    /// The event file could not be read
    #[error("Failed to read event payload from {}: {source}", path.display())]
    EventRead {
        /// Path of the event file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The event file is not valid JSON
    #[error("Failed to parse event payload from {}: {source}", path.display())]
    EventParse {
        /// Path of the event file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The event payload has no `pull_request` object
    #[error("This tool only supports pull_request events.")]
    NotPullRequest,

    /// The required items file could not be read
    #[error("Failed to read checklist items from {}: {source}", path.display())]
    ItemsRead {
        /// Path of the items file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// No required items were configured
    #[error("No checklist lines configured. Provide at least one checklist line.")]
    NoRequiredItems,

    /// The settings file could not be read
    #[error("Failed to read config from {}: {source}", path.display())]
    ConfigRead {
        /// Path of the settings file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The settings file is not valid TOML for this tool
    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        /// Path of the settings file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// A setting value is not recognized
    #[error("{0}")]
    InvalidSetting(String),
}

impl GateError {
    /// Whether this error came from the event payload rather than configuration
    #[must_use]
    pub const fn is_event_error(&self) -> bool {
        matches!(
            self,
            Self::EventPathUnset
                | Self::EventRead { .. }
                | Self::EventParse { .. }
                | Self::NotPullRequest
        )
    }
}
