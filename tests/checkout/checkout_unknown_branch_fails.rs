use crate::common::command::{init_repository_dir, run_nib_command};
use crate::common::file::{FileSpec, write_file};
use crate::common::{list_file_names, repository_root, staging_dir};
use assert_fs::TempDir;
use predicates::prelude::{PredicateBooleanExt, predicate};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case::forced(&["checkout", "--force", "ghost"])]
#[case::unforced(&["checkout", "ghost"])]
fn checkout_unknown_branch_fails(init_repository_dir: TempDir, #[case] args: &[&str]) {
    let dir = init_repository_dir.path();

    write_file(FileSpec::new(dir.join("draft.txt"), "unfinished".to_string()));
    run_nib_command(dir, &["stage", "draft.txt"])
        .assert()
        .success();

    run_nib_command(dir, args)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("branch ghost does not exist")
                .and(predicate::str::contains("discarded").not()),
        );

    assert_eq!(list_file_names(&staging_dir(dir)), vec!["draft.txt"]);
    let head = std::fs::read_to_string(repository_root(dir).join("HEAD"))
        .expect("Failed to read HEAD");
    assert_eq!(head.trim(), "main");
}
