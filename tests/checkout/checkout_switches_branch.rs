use crate::common::command::{init_repository_dir, run_nib_command};
use crate::common::repository_root;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_switches_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_nib_command(dir, &["branch", "create", "feature"])
        .assert()
        .success();

    run_nib_command(dir, &["checkout", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Switched to -> feature."))
        .stdout(predicate::str::contains("Staging area reset for -> feature."));

    let head = std::fs::read_to_string(repository_root(dir).join("HEAD"))
        .expect("Failed to read HEAD");
    assert_eq!(head.trim(), "feature");

    run_nib_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("On branch feature"));
}
