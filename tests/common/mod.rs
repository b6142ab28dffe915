#![allow(dead_code)]


use std::path::{Path, PathBuf};

pub const REPOSITORY_DIR: &str = ".nib";
pub const COMMIT_DATE: &str = "2023-01-01 12:00:00";

pub fn repository_root(dir: &Path) -> PathBuf {
    dir.join(REPOSITORY_DIR)
}

pub fn staging_dir(dir: &Path) -> PathBuf {
    repository_root(dir).join("staging")
}

pub fn snapshot_dir(dir: &Path, id: u64) -> PathBuf {
    repository_root(dir).join("commits").join(format!("commit_{id}"))
}

/// Parsed contents of `branches.json`
pub fn read_registry(dir: &Path) -> serde_json::Value {
    let path = repository_root(dir).join("branches.json");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read registry {:?}: {}", path, e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse registry {:?}: {}", path, e))
}

/// Commit ids recorded for `branch`, in history order
pub fn history_ids(dir: &Path, branch: &str) -> Vec<u64> {
    read_registry(dir)[branch]
        .as_array()
        .unwrap_or_else(|| panic!("Branch {} missing from registry", branch))
        .iter()
        .map(|record| record["id"].as_u64().expect("Commit id is not a number"))
        .collect()
}

/// Sorted file names of a directory
pub fn list_file_names(dir: &Path) -> Vec<String> {
    let mut names = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {:?}: {}", dir, e))
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    names.sort();
    names
}
