//! Gate service - orchestrates a complete gate run
//!
//! Reads the event, applies the author exclusion, then evaluates the
//! description. All I/O goes through the port traits.

use crate::core::models::{GateDecision, StatusPolicy};
use crate::core::ports::{ChecklistSource, EventSource};
use crate::error::GateError;

use super::evaluator::evaluate;
use super::exclusion::is_excluded;
use super::parser::split_lines;

/// Run the gate against the given sources
///
/// An excluded author short-circuits before the required items are loaded
/// or the description is parsed.
pub fn run_gate(
    source: &dyn ChecklistSource,
    events: &dyn EventSource,
    policy: StatusPolicy,
) -> Result<GateDecision, GateError> {
    let pull_request = events.pull_request()?;

    let excluded = source.excluded_identities();
    if is_excluded(&pull_request.author, &excluded) {
        log::debug!("Author {:?} is excluded; skipping evaluation", pull_request.author);
        return Ok(GateDecision::Excluded {
            author: pull_request.author,
        });
    }

    let required = source.required_items()?;
    if required.is_empty() {
        return Err(GateError::NoRequiredItems);
    }
    log::debug!("Evaluating {} required item(s) with {:?}", required.len(), policy);

    let lines = split_lines(&pull_request.body);
    Ok(GateDecision::Evaluated(evaluate(&required, &lines, policy)))
}
