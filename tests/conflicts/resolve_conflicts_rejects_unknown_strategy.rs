use crate::common::command::{diverged_repository, repository_dir, run_nib_command};
use crate::common::history_ids;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn resolve_conflicts_rejects_unknown_strategy(repository_dir: TempDir) {
    let dir = repository_dir.path();
    diverged_repository(dir, "A", "B");

    run_nib_command(dir, &["resolve-conflicts", "--strategy", "mine", "feature"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid resolution strategy 'mine'"));

    assert_eq!(history_ids(dir, "main"), vec![1]);
}
