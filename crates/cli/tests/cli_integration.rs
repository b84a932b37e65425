//! CLI integration tests for all subcommands.
//!
//! Uses `assert_cmd` to spawn the `tick` binary and verify
//! exit codes, stdout content, and stderr content.
//!
//! Tests set `current_dir` to the workspace root so that relative
//! paths to fixtures resolve correctly.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/cli -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

/// Helper: create a Command for the `tick` binary, rooted at workspace.
fn tick() -> Command {
    let mut cmd = cargo_bin_cmd!("tick");
    cmd.current_dir(workspace_root());
    cmd.env_remove("RUST_LOG");
    cmd
}

const VALID_STORY: &str = "fixtures/validation/tick-story-valid.json";
const INVALID_INTENTS: &str = "fixtures/validation/tick-story-invalid-intents.json";
const INVALID_CONSISTENCY: &str = "fixtures/validation/tick-story-invalid-consistency.json";
const VALID_MACHINE: &str = "fixtures/state-machine/xstate-valid.json";

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_exits_0_with_description() {
    tick()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tick story toolchain"));
}

#[test]
fn version_exits_0() {
    tick()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tick"));
}

#[test]
fn validate_help_lists_options() {
    tick()
        .args(["validate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--check"))
        .stdout(predicate::str::contains("--handlers"));
}

// ──────────────────────────────────────────────
// 2. Validate subcommand
// ──────────────────────────────────────────────

#[test]
fn validate_valid_story_exits_0() {
    tick()
        .args([
            "validate",
            VALID_STORY,
            "--handlers",
            "ACTION_1_handler",
            "--stories",
            "farewell_story",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "valid: story 'meeting' passed 16 check(s)",
        ));
}

#[test]
fn validate_without_registries_reports_findings() {
    tick()
        .args(["validate", VALID_STORY])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "[action-handlers] Action handler ACTION_1_handler not found in handlers repository",
        ))
        .stdout(predicate::str::contains(
            "[target-stories] Target story farewell_story of action BYE not found",
        ));
}

#[test]
fn validate_selected_checks_only() {
    tick()
        .args(["validate", VALID_STORY, "--check", "intents,transitions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("passed 2 check(s)"));
}

#[test]
fn validate_json_report_lists_every_intent() {
    let output = tick()
        .args([
            "--output",
            "json",
            "validate",
            INVALID_INTENTS,
            "--check",
            "intents",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report = stdout_json(&output);
    assert_eq!(report["story_id"], "invalid_intents");
    assert_eq!(report["checks_run"], serde_json::json!(["intents"]));
    let findings = report["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 6);
    assert!(findings
        .iter()
        .any(|f| f["message"] == "Intent primaryIntents_3 not found in StateMachine"));
}

#[test]
fn validate_every_dimension_in_json() {
    let output = tick()
        .args(["--output", "json", "validate", INVALID_CONSISTENCY])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report = stdout_json(&output);
    assert_eq!(report["checks_run"].as_array().unwrap().len(), 16);
    assert_eq!(report["findings"].as_array().unwrap().len(), 18);
}

#[test]
fn validate_invalid_check_exits_1() {
    tick()
        .args(["validate", VALID_STORY, "--check", "intents,s1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid check"));
}

#[test]
fn validate_empty_check_selection_exits_1() {
    for flag in [",", ""] {
        tick()
            .args([
                "validate",
                INVALID_CONSISTENCY,
                "--check",
                flag,
            ])
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::contains("passed").not())
            .stderr(predicate::str::contains("invalid check"));
    }
}

#[test]
fn validate_empty_config_check_list_exits_1() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("tick.toml");
    fs::write(&config, "[validation]\nchecks = []\n").unwrap();

    tick()
        .args([
            "validate",
            INVALID_CONSISTENCY,
            "--config",
            config.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("at least one check"));
}

#[test]
fn validate_nonexistent_story_exits_1() {
    tick()
        .args(["validate", "nonexistent_story_xyz.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error loading story"));
}

#[test]
fn validate_missing_field_named_in_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("story.json");
    fs::write(&path, r#"{"storyId": "x", "mainIntent": "hello"}"#).unwrap();

    tick()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("stateMachine"));
}

#[test]
fn validate_json_error_output() {
    let output = tick()
        .args(["--output", "json", "validate", "nonexistent_story_xyz.json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).expect("stderr is JSON");
    assert!(err["error"].as_str().unwrap().contains("error loading story"));
}

#[test]
fn validate_quiet_prints_nothing() {
    tick()
        .args(["--quiet", "validate", VALID_STORY])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty());
}

#[test]
fn validate_with_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("tick.toml");
    fs::write(
        &config,
        r#"
[handlers]
registered = ["ACTION_1_handler"]

[stories]
known = ["farewell_story"]
"#,
    )
    .unwrap();

    tick()
        .args([
            "validate",
            VALID_STORY,
            "--config",
            config.to_str().unwrap(),
        ])
        .assert()
        .success();
}

#[test]
fn validate_flags_extend_config_registries() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("tick.toml");
    fs::write(&config, "[handlers]\nregistered = [\"ACTION_1_handler\"]\n").unwrap();

    tick()
        .args([
            "validate",
            VALID_STORY,
            "--config",
            config.to_str().unwrap(),
            "--stories",
            "farewell_story",
        ])
        .assert()
        .success();
}

#[test]
fn validate_picks_up_tick_toml_in_working_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("tick.toml"),
        "[validation]\nchecks = [\"intents\", \"states\"]\n",
    )
    .unwrap();
    let story = workspace_root().join(VALID_STORY);

    let mut cmd = cargo_bin_cmd!("tick");
    cmd.current_dir(tmp.path())
        .args(["validate", story.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("passed 2 check(s)"));
}

#[test]
fn validate_invalid_config_exits_1() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("tick.toml");
    fs::write(&config, "[handlers\n").unwrap();

    tick()
        .args([
            "validate",
            VALID_STORY,
            "--config",
            config.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config error"));
}

// ──────────────────────────────────────────────
// 3. Lint subcommand
// ──────────────────────────────────────────────

#[test]
fn lint_valid_story_exits_0() {
    tick()
        .args(["lint", VALID_STORY])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn lint_schema_violation_exits_1() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(
        &path,
        r#"{"storyId": "", "mainIntent": "hello", "stateMachine": {"on": {"x": "HELLO"}}}"#,
    )
    .unwrap();

    tick()
        .args(["lint", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid story document"));
}

#[test]
fn lint_json_output() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(&path, r#"{"storyId": "x"}"#).unwrap();

    let output = tick()
        .args(["--output", "json", "lint", path.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let result: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(result["valid"], false);
    assert!(!result["errors"].as_array().unwrap().is_empty());
}

#[test]
fn lint_quiet_json_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.json");
    fs::write(&path, r#"{"storyId": "x"}"#).unwrap();

    tick()
        .args(["--quiet", "--output", "json", "lint", path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

// ──────────────────────────────────────────────
// 4. Inspect subcommand
// ──────────────────────────────────────────────

#[test]
fn inspect_story_lists_states() {
    tick()
        .args(["inspect", VALID_STORY])
        .assert()
        .success()
        .stdout(predicate::str::contains("Story: meeting"))
        .stdout(predicate::str::contains("Initial: HELLO"))
        .stdout(predicate::str::contains("Global --[t_restart]--> HELLO"));
}

#[test]
fn inspect_bare_machine_json() {
    let output = tick()
        .args(["--output", "json", "inspect", "--machine", VALID_MACHINE])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary = stdout_json(&output);
    assert_eq!(summary["story_id"], serde_json::Value::Null);
    assert_eq!(summary["initial"], "INTRODUCTION");
    assert_eq!(summary["leaves"].as_array().unwrap().len(), 6);
    assert_eq!(summary["groups"].as_array().unwrap().len(), 4);
    assert_eq!(summary["transitions"].as_array().unwrap().len(), 5);
}

#[test]
fn inspect_self_loop_exits_1() {
    tick()
        .args([
            "inspect",
            "--machine",
            "fixtures/state-machine/xstate-invalid-self-loop.json",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("self-loops were detected: HELLO"));
}

#[test]
fn inspect_duplicate_states_exits_1() {
    tick()
        .args([
            "inspect",
            "--machine",
            "fixtures/state-machine/xstate-invalid-duplicate-states.json",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("duplicate states were detected: HELLO"));
}

// ──────────────────────────────────────────────
// 5. Next subcommand
// ──────────────────────────────────────────────

#[test]
fn next_descends_into_group_initial() {
    tick()
        .args([
            "next",
            "--machine",
            VALID_MACHINE,
            "--state",
            "INTRODUCTION",
            "--intent",
            "i_ask_book_visio",
        ])
        .assert()
        .success()
        .stdout("S_SHOW_PROCEDURE_BOOK_MEETING\n");
}

#[test]
fn next_on_story_json_output() {
    let output = tick()
        .args([
            "--output",
            "json",
            "next",
            VALID_STORY,
            "--state",
            "ACTION_2",
            "--intent",
            "primaryIntent_1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let result = stdout_json(&output);
    assert_eq!(result["to"], "ACTION_1");
}

#[test]
fn next_without_transition_exits_1() {
    tick()
        .args([
            "next",
            VALID_STORY,
            "--state",
            "HELLO",
            "--intent",
            "unknown_intent",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "no transition 'unknown_intent' from state 'HELLO'",
        ));
}

#[test]
fn next_unknown_state_exits_1() {
    tick()
        .args([
            "next",
            VALID_STORY,
            "--state",
            "NOWHERE",
            "--intent",
            "mainIntent",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown state 'NOWHERE'"));
}
