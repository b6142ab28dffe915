use crate::common::command::{diverged_repository, repository_dir, run_nib_command};
use crate::common::{history_ids, list_file_names, staging_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::ours("ours")]
#[case::theirs("theirs")]
#[case::manual("manual")]
fn resolve_conflicts_reports_strategy(repository_dir: TempDir, #[case] strategy: &str) {
    let dir = repository_dir.path();
    diverged_repository(dir, "A", "B");

    run_nib_command(dir, &["resolve-conflicts", "--strategy", strategy, "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Conflicts detected in:"))
        .stdout(predicate::str::contains("Resolving 1 conflict(s) with strategy"));

    assert_eq!(history_ids(dir, "main"), vec![1]);
    assert!(list_file_names(&staging_dir(dir)).is_empty());
}
