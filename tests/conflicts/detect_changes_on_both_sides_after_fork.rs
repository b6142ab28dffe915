use crate::common::command::{commit_file, init_repository_dir, run_nib_command};
use crate::common::history_ids;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn detect_changes_on_both_sides_after_fork(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_nib_command(dir, &["branch", "create", "feature"])
        .assert()
        .success();
    run_nib_command(dir, &["checkout", "feature"])
        .assert()
        .success();
    commit_file(dir, "f.txt", "B", "Feature version");

    run_nib_command(dir, &["checkout", "main"])
        .assert()
        .success();
    commit_file(dir, "f.txt", "C", "Main version");

    run_nib_command(dir, &["merge", "--history-only", "feature"])
        .assert()
        .success();
    assert_eq!(history_ids(dir, "main"), vec![1, 3, 1, 2]);

    run_nib_command(dir, &["conflicts", "feature"])
        .assert()
        .success()
        .stdout("Conflicts detected in:\n    f.txt\n");
}
