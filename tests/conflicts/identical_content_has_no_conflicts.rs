use crate::common::command::{diverged_repository, repository_dir, run_nib_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn identical_content_has_no_conflicts(repository_dir: TempDir) {
    let dir = repository_dir.path();
    diverged_repository(dir, "A", "A");

    run_nib_command(dir, &["conflicts", "feature"])
        .assert()
        .success()
        .stdout("No conflicts detected.\n");
}
