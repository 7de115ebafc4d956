//! Show how a description is parsed and normalized

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use checklist_gate::adapters::github::GithubEventFile;
use checklist_gate::core::ports::EventSource;
use checklist_gate::core::services::{normalize, parse_entries, split_lines};
use checklist_gate::output::{EntryInfo, InspectResult, OutputMode};

use super::settings;
use crate::cli::PolicyArgs;

/// List every checklist entry with its normalized status
pub fn inspect(
    body_file: Option<&Path>,
    event: Option<PathBuf>,
    policy_args: &PolicyArgs,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let (_, policy) = settings::resolve(policy_args)?;

    let body = match body_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => GithubEventFile::new(event).pull_request()?.body,
    };

    let lines = split_lines(&body);
    let entries = parse_entries(&lines)
        .into_iter()
        .map(|entry| EntryInfo {
            status: normalize(&entry.status_token, policy),
            label: entry.label,
            token: entry.status_token,
        })
        .collect();

    let result = InspectResult {
        vocabulary: policy.vocabulary.to_string(),
        declined: policy.declined.to_string(),
        entries,
    };
    result.render(mode);
    Ok(())
}
