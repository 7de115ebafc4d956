//! Domain models for checklist-gate
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ChecklistEntry`] - A parsed `- [token] label` line
//! - [`NormalizedStatus`] - What a bracket token means
//! - [`StatusPolicy`] - Which tokens are recognized and how `✖` is treated
//! - [`EvaluationOutcome`] - Required labels sorted into result buckets
//! - [`PullRequest`] - Description and author of the triggering pull request

mod entry;
mod outcome;
mod policy;
mod pull_request;
mod status;

pub use entry::ChecklistEntry;
pub use outcome::{EvaluationOutcome, GateDecision, InvalidStatus};
pub use policy::{DeclinedPolicy, StatusPolicy, StatusVocabulary};
pub use pull_request::PullRequest;
pub use status::NormalizedStatus;
