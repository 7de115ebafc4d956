//! Run the gate for the triggering pull request

use checklist_gate::adapters::file::{FileChecklistSource, ListLocation};
use checklist_gate::adapters::github::{GithubEventFile, running_in_actions};
use checklist_gate::core::services::run_gate;
use checklist_gate::output::{GateReport, OutputMode};

use super::settings;
use crate::cli::{AnnotationMode, CheckArgs};

/// Evaluate the pull request description and render the report
///
/// Returns whether the gate passed; unusable inputs are errors.
pub fn check(args: &CheckArgs, mode: OutputMode) -> anyhow::Result<bool> {
    let (config, policy) = settings::resolve(&args.policy)?;

    let items_file = args.items_file.as_deref().unwrap_or(config.sources.items_file.as_path());
    let exclusions_file =
        args.exclusions_file.as_deref().unwrap_or(config.sources.exclusions_file.as_path());

    let source = FileChecklistSource::new(
        ListLocation::resolve(args.items.as_deref(), items_file),
        ListLocation::resolve(args.exclusions.as_deref(), exclusions_file),
    );
    let events = GithubEventFile::new(args.event.clone());

    let decision = run_gate(&source, &events, policy)?;
    let report = GateReport::from(decision);

    let annotate = match args.annotations {
        AnnotationMode::Auto => running_in_actions(),
        AnnotationMode::Github => true,
        AnnotationMode::None => false,
    };
    report.render(mode, annotate);

    Ok(report.passed)
}
