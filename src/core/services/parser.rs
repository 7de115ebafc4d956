//! Checklist line parser
//!
//! Recognizes `- [token] label` and `* [token] label`. The bracket may hold
//! anything except `]`; judging the token is left to the normalizer.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::ChecklistEntry;

static CHECKLIST_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[*-]\s*\[([^\]]*)\](.*)$").expect("checklist line pattern is valid")
});

/// Split a description into trimmed lines
///
/// Handles both `\n` and `\r\n` line endings.
#[must_use]
pub fn split_lines(body: &str) -> Vec<&str> {
    body.lines().map(str::trim).collect()
}

/// Parse one line into a checklist entry
///
/// Returns `None` for prose, for a bullet without a closing bracket, and for
/// a checklist marker with no label text.
#[must_use]
pub fn parse_line(line: &str) -> Option<ChecklistEntry> {
    let caps = CHECKLIST_LINE.captures(line.trim())?;
    let token = caps.get(1)?.as_str();
    let label = caps.get(2)?.as_str().trim();

    if label.is_empty() {
        return None;
    }

    Some(ChecklistEntry::new(label, token))
}

/// Parse every checklist entry in a sequence of lines
#[must_use]
pub fn parse_entries(lines: &[&str]) -> Vec<ChecklistEntry> {
    lines.iter().filter_map(|line| parse_line(line)).collect()
}
