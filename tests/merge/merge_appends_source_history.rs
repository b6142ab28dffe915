use crate::common::command::{diverged_repository, repository_dir, run_nib_command};
use crate::common::{history_ids, staging_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_appends_source_history(repository_dir: TempDir) {
    let dir = repository_dir.path();
    diverged_repository(dir, "A", "B");

    run_nib_command(dir, &["merge", "feature"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Branch feature merged into main."))
        .stdout(predicate::str::contains("File f.txt merged from branch feature."));

    assert_eq!(history_ids(dir, "main"), vec![1, 1, 2]);
    assert_eq!(history_ids(dir, "feature"), vec![1, 2]);

    // the oldest version of the file wins
    let staged =
        std::fs::read_to_string(staging_dir(dir).join("f.txt")).expect("Failed to read staged file");
    assert_eq!(staged, "A");
}
