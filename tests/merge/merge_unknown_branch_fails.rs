use crate::common::command::{init_repository_dir, run_nib_command};
use crate::common::history_ids;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::merge(&["merge", "ghost"])]
#[case::apply_merge(&["apply-merge", "ghost"])]
#[case::conflicts(&["conflicts", "ghost"])]
fn merge_unknown_branch_fails(init_repository_dir: TempDir, #[case] args: &[&str]) {
    let dir = init_repository_dir.path();

    run_nib_command(dir, args)
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch ghost does not exist"));

    assert_eq!(history_ids(dir, "main"), vec![1]);
}
