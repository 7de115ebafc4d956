//! Tests for the GitHub event payload reader

use std::fs;

use checklist_gate::adapters::github::GithubEventFile;
use checklist_gate::core::models::PullRequest;
use checklist_gate::core::ports::EventSource;
use checklist_gate::error::GateError;
use tempfile::TempDir;

fn event_file(temp: &TempDir, content: &str) -> GithubEventFile {
    let path = temp.path().join("event.json");
    fs::write(&path, content).unwrap();
    GithubEventFile::new(Some(path))
}

#[test]
fn reads_pull_request_from_file() {
    let temp = TempDir::new().unwrap();
    let source = event_file(
        &temp,
        r#"{"action": "opened", "pull_request": {"body": "- [x] A\r\n- [ ] B", "user": {"login": "octocat"}}}"#,
    );

    assert_eq!(
        source.pull_request().unwrap(),
        PullRequest::new("- [x] A\r\n- [ ] B", "octocat")
    );
}

#[test]
fn missing_body_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    let source = event_file(&temp, r#"{"pull_request": {}}"#);

    assert_eq!(source.pull_request().unwrap(), PullRequest::default());
}

#[test]
fn malformed_json_is_parse_error() {
    let temp = TempDir::new().unwrap();
    let source = event_file(&temp, "{not json");

    assert!(matches!(source.pull_request(), Err(GateError::EventParse { .. })));
}

#[test]
fn missing_file_is_read_error() {
    let temp = TempDir::new().unwrap();
    let source = GithubEventFile::new(Some(temp.path().join("absent.json")));

    let err = source.pull_request().unwrap_err();
    assert!(matches!(err, GateError::EventRead { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn push_event_is_rejected() {
    let temp = TempDir::new().unwrap();
    let source = event_file(&temp, r#"{"ref": "refs/heads/main", "commits": []}"#);

    assert!(matches!(source.pull_request(), Err(GateError::NotPullRequest)));
}
