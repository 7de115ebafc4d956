//! Settings resolution shared by commands
//!
//! Flags win over `.checklist-gate.toml`, which wins over defaults.

use anyhow::Context;

use checklist_gate::config::GateConfig;
use checklist_gate::core::models::{DeclinedPolicy, StatusPolicy, StatusVocabulary};
use checklist_gate::error::GateError;

use crate::cli::PolicyArgs;

/// Load the settings file and apply vocabulary overrides
pub fn resolve(args: &PolicyArgs) -> anyhow::Result<(GateConfig, StatusPolicy)> {
    let config = GateConfig::load(args.config.as_deref())?;
    let mut policy = config.status;

    if let Some(vocabulary) = &args.vocabulary {
        policy.vocabulary = vocabulary
            .parse::<StatusVocabulary>()
            .map_err(GateError::InvalidSetting)
            .context("--vocabulary")?;
    }
    if let Some(declined) = &args.declined {
        policy.declined = declined
            .parse::<DeclinedPolicy>()
            .map_err(GateError::InvalidSetting)
            .context("--declined")?;
    }

    log::debug!(
        "Status policy: vocabulary={}, declined={}",
        policy.vocabulary,
        policy.declined
    );
    Ok((config, policy))
}
