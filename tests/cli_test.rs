//! Integration tests for the required-tasks binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const BODY_INCOMPLETE: &str = include_str!("fixtures/body_incomplete.md");
const BODY_COMPLETED: &str = include_str!("fixtures/body_completed.md");

/// A command with the CI environment of the test runner removed.
fn required_tasks() -> Command {
    let mut cmd = Command::new(cargo_bin("required-tasks"));
    cmd.env_remove("GITHUB_ACTIONS")
        .env_remove("GITHUB_EVENT_PATH")
        .env_remove("REQUIRED_TASKS_BODY_FILE")
        .env_remove("RUST_LOG");
    cmd
}

fn write_event(temp: &TempDir, body: Option<&str>) -> PathBuf {
    let path = temp.path().join("event.json");
    let payload = serde_json::json!({
        "action": "opened",
        "number": 7,
        "pull_request": {
            "number": 7,
            "title": "Add retry support",
            "body": body,
        }
    });
    fs::write(&path, payload.to_string()).unwrap();
    path
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = required_tasks();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("required pull request checklist"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = required_tasks();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_fails_on_incomplete_event_body() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let event = write_event(&temp, Some(BODY_INCOMPLETE));
    let mut cmd = required_tasks();
    cmd.env("GITHUB_EVENT_PATH", &event);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("  - [ ] required task 2"))
        .stderr(predicate::str::contains("✗ Some required tasks are incomplete.").count(1));
    Ok(())
}

#[test]
fn cli_passes_on_completed_event_body() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let event = write_event(&temp, Some(BODY_COMPLETED));
    let mut cmd = required_tasks();
    cmd.env("GITHUB_EVENT_PATH", &event);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All required tasks are complete."))
        .stderr(predicate::str::contains("Some required tasks are incomplete.").not());
    Ok(())
}

#[test]
fn cli_passes_on_null_body() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let event = write_event(&temp, None);
    let mut cmd = required_tasks();
    cmd.env("GITHUB_EVENT_PATH", &event);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("⚠ No pull request body found"));
    Ok(())
}

#[test]
fn cli_emits_workflow_command_in_actions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let event = write_event(&temp, Some(BODY_INCOMPLETE));
    let mut cmd = required_tasks();
    cmd.env("GITHUB_ACTIONS", "true")
        .env("GITHUB_EVENT_PATH", &event);
    cmd.assert().code(1).stdout(
        predicate::str::contains("::error::Some required tasks are incomplete.").count(1),
    );
    Ok(())
}

#[test]
fn cli_reports_missing_event_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = required_tasks();
    cmd.env("GITHUB_EVENT_PATH", temp.path().join("missing.json"));
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Event payload not found"));
    Ok(())
}

#[test]
fn cli_reports_invalid_event_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let event = temp.path().join("event.json");
    fs::write(&event, "{ not json")?;
    let mut cmd = required_tasks();
    cmd.env("GITHUB_ACTIONS", "true")
        .env("GITHUB_EVENT_PATH", &event);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("::error::Failed to parse event payload"));
    Ok(())
}

#[test]
fn cli_reports_missing_source() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = required_tasks();
    cmd.arg("check");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("No pull request body source"));
    Ok(())
}

#[test]
fn cli_check_reads_body_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let body = temp.path().join("body.md");
    fs::write(&body, "<!-- required_task_group -->\n- [ ] a\n- [ ] b\n")?;
    let mut cmd = required_tasks();
    cmd.args(["check", "--body-file"]).arg(&body);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Required group 1 needs at least one checked item:",
        ));
    Ok(())
}

#[test]
fn cli_check_reads_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = required_tasks();
    cmd.args(["check", "--body-file", "-"])
        .write_stdin("<!-- required_task -->\n- [x] done\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("All required tasks are complete."));
    Ok(())
}

#[test]
fn cli_check_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let event = write_event(&temp, Some(BODY_INCOMPLETE));
    let mut cmd = required_tasks();
    cmd.args(["check", "--format", "json", "--event-path"])
        .arg(&event);
    let output = cmd.assert().code(1).get_output().stdout.clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["passed"], false);
    assert_eq!(parsed["incomplete_tasks"].as_array().unwrap().len(), 4);
    assert_eq!(parsed["incomplete_groups"].as_array().unwrap().len(), 2);
    Ok(())
}

#[test]
fn cli_quiet_only_prints_failure() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let event = write_event(&temp, Some(BODY_INCOMPLETE));
    let mut cmd = required_tasks();
    cmd.arg("--quiet").env("GITHUB_EVENT_PATH", &event);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Some required tasks are incomplete."));
    Ok(())
}

#[test]
fn cli_list_shows_regions() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let event = write_event(&temp, Some(BODY_INCOMPLETE));
    let mut cmd = required_tasks();
    cmd.arg("list").env("GITHUB_EVENT_PATH", &event);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Line 11: required tasks (complete)"))
        .stdout(predicate::str::contains("Line 33: required group (incomplete)"))
        .stdout(predicate::str::contains("    - [ ] required task 11 (group 4)"));
    Ok(())
}

#[test]
fn cli_quiet_json_still_prints_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let event = write_event(&temp, Some(BODY_INCOMPLETE));
    let mut cmd = required_tasks();
    cmd.args(["-q", "check", "--format", "json", "--event-path"])
        .arg(&event);
    let output = cmd.assert().code(1).get_output().stdout.clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(parsed["passed"], false);
    Ok(())
}

#[test]
fn cli_top_level_body_file_applies_to_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let body = temp.path().join("body.md");
    fs::write(&body, "<!-- required_task -->\n- [ ] a\n")?;
    let mut cmd = required_tasks();
    cmd.arg("--body-file").arg(&body).arg("check");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("  - [ ] a"))
        .stderr(predicate::str::contains("No pull request body source").not());
    Ok(())
}

#[test]
fn cli_missing_body_file_reports_cause() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = required_tasks();
    cmd.args(["check", "--body-file"])
        .arg(temp.path().join("nope.md"));
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read body file"))
        .stderr(predicate::str::contains("nope.md: "));
    Ok(())
}

#[test]
fn cli_actions_json_is_followed_by_workflow_command() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let event = write_event(&temp, Some(BODY_INCOMPLETE));
    let mut cmd = required_tasks();
    cmd.env("GITHUB_ACTIONS", "true")
        .args(["check", "--format", "json", "--event-path"])
        .arg(&event);
    let output = cmd.assert().code(1).get_output().stdout.clone();

    // The JSON document comes first, the annotation is the last line.
    let mut stream = serde_json::Deserializer::from_slice(&output).into_iter::<serde_json::Value>();
    let parsed = stream.next().unwrap()?;
    assert_eq!(parsed["passed"], false);

    let stdout = String::from_utf8(output)?;
    assert_eq!(
        stdout.lines().last(),
        Some("::error::Some required tasks are incomplete.")
    );
    Ok(())
}
