use crate::common::command::{diverged_repository, repository_dir, run_nib_command};
use crate::common::{history_ids, list_file_names, staging_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn detect_conflicting_file(repository_dir: TempDir) {
    let dir = repository_dir.path();
    diverged_repository(dir, "A", "B");

    run_nib_command(dir, &["merge", "--history-only", "feature"])
        .assert()
        .success();

    run_nib_command(dir, &["conflicts", "feature"])
        .assert()
        .success()
        .stdout("Conflicts detected in:\n    f.txt\n");

    // detection has no side effects
    assert_eq!(history_ids(dir, "main"), vec![1, 1, 2]);
    assert!(list_file_names(&staging_dir(dir)).is_empty());
}
