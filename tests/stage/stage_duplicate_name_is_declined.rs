use crate::common::command::{repository_dir, run_nib_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::staging_dir;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn stage_duplicate_name_is_declined(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_nib_command(dir, &["init"]).assert().success();

    write_file(FileSpec::new(dir.join("a.txt"), "first".to_string()));
    write_file(FileSpec::new(dir.join("nested").join("a.txt"), "second".to_string()));

    run_nib_command(dir, &["stage", "a.txt"]).assert().success();
    run_nib_command(dir, &["stage", "nested/a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file a.txt is already staged"));

    let staged =
        std::fs::read_to_string(staging_dir(dir).join("a.txt")).expect("Failed to read staged file");
    assert_eq!(staged, "first");
}
