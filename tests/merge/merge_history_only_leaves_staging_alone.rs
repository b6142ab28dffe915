use crate::common::command::{diverged_repository, repository_dir, run_nib_command};
use crate::common::{history_ids, list_file_names, staging_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_history_only_leaves_staging_alone(repository_dir: TempDir) {
    let dir = repository_dir.path();
    diverged_repository(dir, "A", "B");

    run_nib_command(dir, &["merge", "--history-only", "feature"])
        .assert()
        .success();
    run_nib_command(dir, &["merge", "--history-only", "feature"])
        .assert()
        .success();

    // no deduplication on repeated merges
    assert_eq!(history_ids(dir, "main"), vec![1, 1, 2, 1, 2]);
    assert!(list_file_names(&staging_dir(dir)).is_empty());
}
