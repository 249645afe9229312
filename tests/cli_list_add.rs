//! Tests for the `list` and `add` subcommands.

mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn list_shows_roots_and_empty_sections() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Template roots:"))
        .stdout(predicate::str::contains("Pre templates:\n  (none)"))
        .stdout(predicate::str::contains("Post templates:\n  (none)"));
}

#[test]
fn list_groups_templates_and_marks_defaults() {
    let ctx = TestContext::new();
    ctx.write_template("pre", "engineering.default", "x");
    ctx.write_template("post", "wrapup", "y");

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("engineering (default)"))
        .stdout(predicate::str::contains("wrapup"));
}

#[test]
fn list_names_the_owning_root_for_same_root_duplicates() {
    let ctx = TestContext::new();
    ctx.write_template("pre", "review.default", "x");
    ctx.write_template("pre", "review", "y");

    // Both stems display as "review", so one shadows the other inside the
    // global root; the marker must name that root.
    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "shadowed by {}",
            ctx.templates_root().display()
        )));
}

#[test]
fn add_saves_a_pre_template() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["add", "Be thorough.", "--pre", "review"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template saved to"));

    let path = ctx.templates_root().join("pre").join("review.md");
    assert_eq!(fs::read_to_string(&path).unwrap(), "Be thorough.");
}

#[test]
fn added_templates_are_immediately_usable() {
    let ctx = TestContext::new();

    ctx.cli().args(["add", "Be concise.", "--post", "wrapup"]).assert().success();

    ctx.cli()
        .args(["Fix this bug", "--post", "wrapup", "-t", "stdout", "-y"])
        .assert()
        .success()
        .stdout("Fix this bug\n\nBe concise.\n");
}

#[test]
fn add_refuses_to_overwrite() {
    let ctx = TestContext::new();
    ctx.cli().args(["add", "first", "--pre", "review"]).assert().success();

    ctx.cli()
        .args(["add", "second", "--pre", "review"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn add_rejects_both_kinds_at_once() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["add", "content", "--pre", "a", "--post", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pre"));
}

#[test]
fn add_rejects_path_separators_in_names() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["add", "content", "--pre", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path separators"));
}
