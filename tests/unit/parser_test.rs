//! Tests for the checklist line parser

use checklist_gate::core::models::ChecklistEntry;
use checklist_gate::core::services::{parse_entries, parse_line, split_lines};

// =============================================================================
// Single lines
// =============================================================================

#[test]
fn parses_glyph_entry() {
    assert_eq!(parse_line("- [✔] Test line"), Some(ChecklistEntry::new("Test line", "✔")));
}

#[test]
fn parses_word_token() {
    assert_eq!(
        parse_line("* [pending] Security review"),
        Some(ChecklistEntry::new("Security review", "pending"))
    );
}

#[test]
fn label_keeps_inner_brackets() {
    let entry = parse_line("- [x] Update [CHANGELOG](CHANGELOG.md)").unwrap();
    assert_eq!(entry.status_token, "x");
    assert_eq!(entry.label, "Update [CHANGELOG](CHANGELOG.md)");
}

#[test]
fn numbered_list_is_not_a_checklist() {
    assert!(parse_line("1. [x] Numbered").is_none());
}

#[test]
fn bare_bracket_without_bullet_is_not_a_checklist() {
    assert!(parse_line("[x] Test line").is_none());
}

// =============================================================================
// Whole descriptions
// =============================================================================

#[test]
fn parses_mixed_description() {
    let body = "## Checklist\r\n\r\nSome prose.\r\n- [x] Tests\r\n- [ ] Docs\r\n* [NA] Migration\r\n- [x]\r\n";
    let lines = split_lines(body);
    let entries = parse_entries(&lines);

    assert_eq!(
        entries,
        vec![
            ChecklistEntry::new("Tests", "x"),
            ChecklistEntry::new("Docs", " "),
            ChecklistEntry::new("Migration", "NA"),
        ]
    );
}

#[test]
fn empty_description_has_no_entries() {
    assert!(parse_entries(&split_lines("")).is_empty());
}
