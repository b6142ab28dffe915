use crate::common::command::{commit_file, init_repository_dir, run_nib_command};
use crate::common::history_ids;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn create_branch_copies_history(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_nib_command(dir, &["branch", "create", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Branch feature created."));

    assert_eq!(history_ids(dir, "feature"), vec![1]);

    // later commits on main do not leak into the copy
    commit_file(dir, "2.txt", "two", "Second commit");
    assert_eq!(history_ids(dir, "main"), vec![1, 2]);
    assert_eq!(history_ids(dir, "feature"), vec![1]);
}
