//! # Augmentor CLI Solution Merge Integration Tests
//!
//! File: cli/tests/sln.rs
//!
//! ## Overview
//!
//! Integration tests for `augmentor sln`. The external tool is the shell script
//! configured by the test workspace, so these tests only run on Unix.
//!
#![cfg(unix)]

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_sln_adds_projects_in_discovery_order() {
    let ws = Workspace::with_projects(&["B/b.proj", "A/a.proj"]);
    ws.write("Game.sln", "SOLUTION_V1\n");

    ws.cmd()
        .args(["sln", "Game.sln"])
        .assert()
        .success()
        .stdout("SOLUTION_V1\nadded a.proj\nadded b.proj\n");

    // The original is untouched and no scratch file is left behind.
    assert_eq!(ws.read("Game.sln"), "SOLUTION_V1\n");
    assert_eq!(ws.entries(), vec!["Core", "Game.sln", "augmentor.toml"]);
}

#[test]
fn test_sln_in_place() {
    let ws = Workspace::with_projects(&["A/a.proj"]);
    ws.write("Game.sln", "SOLUTION_V1\n");

    ws.cmd()
        .args(["sln", "Game.sln", "--in-place"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(ws.read("Game.sln"), "SOLUTION_V1\nadded a.proj\n");
}

#[test]
fn test_sln_reads_contents_from_stdin() {
    let ws = Workspace::with_projects(&["A/a.proj"]);

    // The solution file itself does not need to exist yet.
    ws.cmd()
        .args(["sln", "Game.sln", "--stdin", "--in-place"])
        .write_stdin("FROM_HOST\n")
        .assert()
        .success();

    assert_eq!(ws.read("Game.sln"), "FROM_HOST\nadded a.proj\n");
    assert_eq!(ws.entries(), vec!["Core", "Game.sln", "augmentor.toml"]);
}

#[test]
fn test_sln_missing_submodule_passes_through() {
    let ws = Workspace::new();
    ws.write("Game.sln", "SOLUTION_V1\n");

    ws.cmd()
        .args(["sln", "Game.sln"])
        .assert()
        .success()
        .stdout("SOLUTION_V1\n")
        .stderr(predicate::str::contains("does not exist"));

    assert_eq!(ws.entries(), vec!["Game.sln", "augmentor.toml"]);
}

#[test]
fn test_sln_continues_after_tool_failure() {
    let ws = Workspace::with_projects(&["A/a.proj", "B/bad.proj", "C/c.proj"]);
    ws.write("Game.sln", "S\n");

    ws.cmd()
        .args(["sln", "Game.sln"])
        .assert()
        .success()
        .stdout("S\nadded a.proj\nadded c.proj\n")
        .stderr(
            predicate::str::contains("Failed to add project")
                .and(predicate::str::contains("bad.proj")),
        );

    assert_eq!(ws.entries(), vec!["Core", "Game.sln", "augmentor.toml"]);
}

#[test]
fn test_sln_submodule_override() {
    let ws = Workspace::new();
    ws.write("Elsewhere/X/x.proj", "<Project />");
    ws.write("Game.sln", "S\n");

    ws.cmd()
        .args(["sln", "Game.sln", "--submodule", "Elsewhere"])
        .assert()
        .success()
        .stdout("S\nadded x.proj\n");
}

#[test]
fn test_sln_missing_solution_file_fails() {
    let ws = Workspace::with_projects(&["A/a.proj"]);

    ws.cmd()
        .args(["sln", "Absent.sln"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}
