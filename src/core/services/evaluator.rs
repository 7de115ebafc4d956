//! Checklist evaluator
//!
//! Reconciles the configured required labels against the checklist entries
//! found in a description. This is pure business logic with no I/O.

use crate::core::models::{
    ChecklistEntry, EvaluationOutcome, InvalidStatus, NormalizedStatus, StatusPolicy,
};

use super::normalizer::normalize;
use super::parser::parse_entries;

/// Evaluate required labels against description lines
///
/// Each label is judged independently and in configured order; a label
/// configured twice is evaluated twice.
///
/// Per label, in priority order:
/// 1. No entry with exactly this label: `missing`
/// 2. Any matching entry with an unrecognized token: `invalid_status`
/// 3. Any matching entry satisfied or not applicable: passes
/// 4. Otherwise: `unsatisfied`
#[must_use]
pub fn evaluate(required: &[String], lines: &[&str], policy: StatusPolicy) -> EvaluationOutcome {
    let entries = parse_entries(lines);
    let mut outcome = EvaluationOutcome::default();

    for label in required {
        let matches: Vec<&ChecklistEntry> = entries.iter().filter(|e| e.label == *label).collect();

        if matches.is_empty() {
            log::debug!("{label:?}: missing");
            outcome.missing.push(label.clone());
            continue;
        }

        let mut invalid_tokens: Vec<String> = Vec::new();
        let mut any_satisfied = false;

        for entry in &matches {
            match normalize(&entry.status_token, policy) {
                NormalizedStatus::Invalid => {
                    if !invalid_tokens.contains(&entry.status_token) {
                        invalid_tokens.push(entry.status_token.clone());
                    }
                },
                status if status.is_satisfied() => any_satisfied = true,
                _ => {},
            }
        }

        if !invalid_tokens.is_empty() {
            log::debug!("{label:?}: invalid status {invalid_tokens:?}");
            outcome.invalid_status.push(InvalidStatus {
                label: label.clone(),
                tokens: invalid_tokens,
            });
        } else if any_satisfied {
            log::debug!("{label:?}: satisfied ({} match(es))", matches.len());
            outcome.satisfied.push(label.clone());
        } else {
            log::debug!("{label:?}: unsatisfied");
            outcome.unsatisfied.push(label.clone());
        }
    }

    outcome
}
