#![allow(deprecated)] // cargo_bin deprecation - still works fine

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("eduhire-assets").unwrap()
}

#[test]
fn tables_command_prints_counts() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("tables")
        .arg("--out-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total API Endpoints Documented: 20"))
        .stdout(predicate::str::contains("ADMIN DASHBOARD PLANNING COMPLETE!"));

    assert!(dir.path().join("eduhire_admin_security_measures.csv").exists());
}

#[test]
fn quiet_suppresses_console_lines() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-q", "tables", "--dataset", "ui-structure", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("eduhire_admin_ui_structure.csv").exists());
}

#[test]
fn out_dir_is_created() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("build").join("assets");

    cmd()
        .args(["tables", "--dataset", "launch-checklist", "--verify", "--out-dir"])
        .arg(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Tasks: 27"));

    assert!(nested.join("eduhire_admin_launch_checklist.csv").exists());
}

#[test]
fn unknown_command_fails() {
    cmd().arg("slides").assert().failure();
}
