//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::adapters::github::error_annotation;
use crate::core::models::{EvaluationOutcome, GateDecision, InvalidStatus, NormalizedStatus};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Header printed above the list of violations
pub const FAILURE_HEADER: &str = "Pull request is missing required checklist approvals:";

/// Line printed when the gate passes
pub const PASSED_LINE: &str = "Checklist gate passed.";

/// Result of a gate run
#[derive(Debug, Clone, Serialize)]
pub struct GateReport {
    /// Whether the gate passed
    pub passed: bool,
    /// Author that bypassed the gate, if any
    pub excluded_author: Option<String>,
    /// Number of required items evaluated
    pub required_items: usize,
    /// Items that passed
    pub satisfied: Vec<String>,
    /// Items with no checklist line
    pub missing: Vec<String>,
    /// Items present but not completed
    pub unsatisfied: Vec<String>,
    /// Items with unrecognized status tokens
    pub invalid_status: Vec<InvalidStatus>,
}

impl From<GateDecision> for GateReport {
    fn from(decision: GateDecision) -> Self {
        match decision {
            GateDecision::Excluded { author } => Self {
                passed: true,
                excluded_author: Some(author),
                required_items: 0,
                satisfied: Vec::new(),
                missing: Vec::new(),
                unsatisfied: Vec::new(),
                invalid_status: Vec::new(),
            },
            GateDecision::Evaluated(outcome) => Self::from(outcome),
        }
    }
}

impl From<EvaluationOutcome> for GateReport {
    fn from(outcome: EvaluationOutcome) -> Self {
        Self {
            passed: outcome.passed(),
            excluded_author: None,
            required_items: outcome.required_count(),
            satisfied: outcome.satisfied,
            missing: outcome.missing,
            unsatisfied: outcome.unsatisfied,
            invalid_status: outcome.invalid_status,
        }
    }
}

impl GateReport {
    /// The single line printed on success
    #[must_use]
    pub fn success_line(&self) -> String {
        self.excluded_author.as_ref().map_or_else(
            || PASSED_LINE.to_string(),
            |author| format!("Checklist gate passed: author {author} is excluded."),
        )
    }

    /// Human-readable violation lines, header first
    #[must_use]
    pub fn failure_lines(&self) -> Vec<String> {
        if self.passed {
            return Vec::new();
        }

        let mut lines = vec![FAILURE_HEADER.to_string()];
        if !self.missing.is_empty() {
            lines.push("Missing:".to_string());
            lines.extend(self.missing.iter().map(|label| format!("  - [ ] {label}")));
        }
        if !self.unsatisfied.is_empty() {
            lines.push("Unsatisfied:".to_string());
            lines.extend(self.unsatisfied.iter().map(|label| format!("  - [ ] {label}")));
        }
        if !self.invalid_status.is_empty() {
            lines.push("Invalid status:".to_string());
            lines.extend(
                self.invalid_status
                    .iter()
                    .map(|i| format!("  - {} (found {})", i.label, quote_tokens(&i.tokens))),
            );
        }
        lines
    }

    /// One workflow annotation per failing item
    #[must_use]
    pub fn annotation_lines(&self) -> Vec<String> {
        let missing = self
            .missing
            .iter()
            .map(|label| error_annotation(&format!("Missing checklist item: {label}")));
        let unsatisfied = self
            .unsatisfied
            .iter()
            .map(|label| error_annotation(&format!("Checklist item not satisfied: {label}")));
        let invalid = self.invalid_status.iter().map(|i| {
            error_annotation(&format!(
                "Checklist item has invalid status {}: {}",
                quote_tokens(&i.tokens),
                i.label
            ))
        });
        missing.chain(unsatisfied).chain(invalid).collect()
    }

    /// Render the result based on output mode
    ///
    /// Annotations are only written in human mode so JSON stays parseable.
    pub fn render(&self, mode: OutputMode, annotate: bool) {
        match mode {
            OutputMode::Human => self.render_human(annotate),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self, annotate: bool) {
        if self.passed {
            println!("{}", self.success_line().green());
            return;
        }

        if annotate {
            for line in self.annotation_lines() {
                println!("{line}");
            }
        }

        let mut lines = self.failure_lines().into_iter();
        if let Some(header) = lines.next() {
            eprintln!("{}", header.red().bold());
        }
        for line in lines {
            eprintln!("{line}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn quote_tokens(tokens: &[String]) -> String {
    tokens.iter().map(|t| format!("{t:?}")).collect::<Vec<_>>().join(", ")
}

/// Result of an inspect operation
#[derive(Debug, Serialize)]
pub struct InspectResult {
    /// Active vocabulary
    pub vocabulary: String,
    /// Active declined policy
    pub declined: String,
    /// Every checklist entry found, in description order
    pub entries: Vec<EntryInfo>,
}

/// A checklist entry with its normalized status
#[derive(Debug, Serialize)]
pub struct EntryInfo {
    /// Entry label
    pub label: String,
    /// Raw bracket token
    pub token: String,
    /// Normalized status
    pub status: NormalizedStatus,
}

impl InspectResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.entries.is_empty() {
            println!("No checklist entries found.");
            return;
        }

        println!(
            "Checklist entries (vocabulary: {}, declined: {}):\n",
            self.vocabulary, self.declined
        );
        for e in &self.entries {
            println!("  [{}] {:<14} {}", e.token, e.status.to_string(), e.label);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
