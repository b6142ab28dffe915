use crate::common::command::{init_repository_dir, run_nib_command};
use crate::common::history_ids;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::default_branch("main", "already exists")]
#[case::invalid_name("bad..name", "invalid branch name")]
fn create_existing_branch_fails(
    init_repository_dir: TempDir,
    #[case] name: &str,
    #[case] message: &str,
) {
    let dir = init_repository_dir.path();

    run_nib_command(dir, &["branch", "create", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));

    assert_eq!(history_ids(dir, "main"), vec![1]);
}
