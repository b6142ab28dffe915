use crate::common::command::{nib_commit, repository_dir, run_nib_command};
use crate::common::file::write_generated_files;
use crate::common::{COMMIT_DATE, list_file_names, read_registry, snapshot_dir, staging_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_snapshots_staged_files(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_nib_command(dir, &["init"]).assert().success();

    let files = write_generated_files(dir, 3);
    for file in &files {
        run_nib_command(dir, &["stage", &file.file_name()])
            .assert()
            .success();
    }

    nib_commit(dir, "Add generated files")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commit 1 created: Add generated files"));

    let snapshot = snapshot_dir(dir, 1);
    for file in &files {
        let committed = std::fs::read_to_string(snapshot.join(file.file_name()))
            .expect("Failed to read snapshot file");
        assert_eq!(committed, file.content);
    }

    assert!(list_file_names(&staging_dir(dir)).is_empty());
    assert_eq!(
        read_registry(dir),
        serde_json::json!({
            "main": [{ "id": 1, "message": "Add generated files", "timestamp": COMMIT_DATE }]
        })
    );
}
