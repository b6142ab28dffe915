use crate::common::command::{init_repository_dir, run_nib_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn list_branches_marks_current(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_nib_command(dir, &["branch", "create", "feature"])
        .assert()
        .success();
    run_nib_command(dir, &["checkout", "feature"])
        .assert()
        .success();

    run_nib_command(dir, &["branch", "list"])
        .assert()
        .success()
        .stdout("* feature\n  main\n");
}
