use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PLAN: &str = "\
# Implementation Plan

- [ ] **Step 1: Establish Core Structure**
  - **Task**: confirm the layout
- [x] **Step 2: Add Tables**
  - **Task**: add the schema
- [ ] Step 3: Server Actions
  - Files:
    - `lib/actions.ts`
";

/// Helper function to create a temporary plan file for CLI tests
fn create_cli_test_environment(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let plan_path = temp_dir.path().join("plan.md");
    std::fs::write(&plan_path, contents).expect("Failed to write plan");
    (temp_dir, plan_path)
}

/// Helper function to create a Command with --no-color and the plan file set
fn planmark_cmd(plan_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("planmark").expect("Failed to find planmark binary");
    cmd.arg("--no-color")
        .arg("--plan-file")
        .arg(plan_path);
    cmd
}

fn read_plan(plan_path: &Path) -> String {
    std::fs::read_to_string(plan_path).expect("Failed to read plan")
}

#[test]
fn test_cli_list_checklist() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("- [ ] 1. Establish Core Structure ← next"))
        .stdout(predicate::str::contains("- [x] 2. Add Tables"))
        .stdout(predicate::str::contains("- [ ] 3. Server Actions"));
}

#[test]
fn test_cli_default_command_lists() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Establish Core Structure"));
}

#[test]
fn test_cli_list_full_and_empty() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);
    planmark_cmd(&plan_path)
        .args(["list", "--full"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 3. Server Actions (○ Todo)"))
        .stdout(predicate::str::contains("`lib/actions.ts`"));

    let (_temp_dir, empty_path) = create_cli_test_environment("just some prose, no bullets");
    planmark_cmd(&empty_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No steps found."));
}

#[test]
fn test_cli_show_and_details() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### 2. Add Tables (✓ Done)"))
        .stdout(predicate::str::contains("add the schema"));

    planmark_cmd(&plan_path)
        .args(["details", "1"])
        .assert()
        .success()
        .stdout("- **Task**: confirm the layout\n");
}

#[test]
fn test_cli_show_plain() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .args(["show", "1", "--plain"])
        .assert()
        .success()
        .stdout("[1] Establish Core Structure\n\n- **Task**: confirm the layout\n");
}

#[test]
fn test_cli_details_for_unknown_step() {
    let plan = format!("Note: Step 9: is only mentioned here.\n\n{PLAN}");
    let (_temp_dir, plan_path) = create_cli_test_environment(&plan);

    planmark_cmd(&plan_path)
        .args(["details", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Step 9 not found"))
        .stdout(predicate::str::contains("is only mentioned").not());

    planmark_cmd(&plan_path)
        .args(["--json", "details", "9"])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn test_cli_complete_rewrites_only_marker() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .args(["complete", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated step 3"))
        .stdout(predicate::str::contains("Marked step as complete"));

    assert_eq!(
        read_plan(&plan_path),
        PLAN.replacen("- [ ] Step 3", "- [X] Step 3", 1)
    );

    planmark_cmd(&plan_path)
        .args(["complete", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 3 already up to date"));
}

#[test]
fn test_cli_missing_step_is_noop() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .args(["complete", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Step 9 not found"));

    planmark_cmd(&plan_path)
        .args(["delete", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Step 9 not found"));

    assert_eq!(read_plan(&plan_path), PLAN);
}

#[test]
fn test_cli_reopen() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .args(["reopen", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked step as incomplete"));

    assert!(read_plan(&plan_path).contains("- [ ] **Step 2: Add Tables**"));
}

#[test]
fn test_cli_delete_header_only() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted step 'Add Tables' (ID: 2)"))
        .stdout(predicate::str::contains("details were kept"));

    let plan = read_plan(&plan_path);
    assert!(!plan.contains("Step 2"));
    assert!(plan.contains("add the schema"));
}

#[test]
fn test_cli_delete_with_details() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .args(["delete", "2", "--with-details"])
        .assert()
        .success();

    let plan = read_plan(&plan_path);
    assert!(!plan.contains("Step 2"));
    assert!(!plan.contains("add the schema"));
    assert!(plan.contains("- [ ] Step 3: Server Actions"));
}

#[test]
fn test_cli_progress_and_next() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .arg("progress")
        .assert()
        .success()
        .stdout(predicate::str::contains("1/3"))
        .stdout(predicate::str::contains("Step 1"));

    planmark_cmd(&plan_path)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Establish Core Structure"));

    let done = PLAN.replace("- [ ]", "- [x]");
    let (_temp_dir, done_path) = create_cli_test_environment(&done);
    planmark_cmd(&done_path)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("All steps are complete"));
}

#[test]
fn test_cli_json_output() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    let output = planmark_cmd(&plan_path)
        .args(["--json", "list"])
        .output()
        .expect("Failed to run planmark");
    assert!(output.status.success());

    let steps: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("list output should be JSON");
    let ids: Vec<u64> = steps
        .as_array()
        .expect("list output should be an array")
        .iter()
        .filter_map(|s| s["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(steps[1]["completed"], serde_json::Value::Bool(true));
}

#[test]
fn test_cli_schema() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"details\""))
        .stdout(predicate::str::contains("\"completed\""));
}

#[test]
fn test_cli_rejects_negative_id() {
    let (_temp_dir, plan_path) = create_cli_test_environment(PLAN);

    planmark_cmd(&plan_path)
        .args(["complete", "--", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative integer"));

    assert_eq!(read_plan(&plan_path), PLAN);
}

#[test]
fn test_cli_missing_plan_file() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let missing = temp_dir.path().join("absent.md");

    planmark_cmd(&missing)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read steps"));
}
