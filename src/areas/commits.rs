//! Commit store
//!
//! Append-only collection of commit snapshots, one directory per commit named
//! `commit_<id>`, each a flat copy of the staging area at commit time.
//! Snapshots are written once and never modified afterwards.

use crate::artifacts::commit::commit_record::CommitId;
use crate::artifacts::objects::blob::Blob;
use crate::error::RepositoryResult;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

#[derive(Debug)]
pub struct CommitStore {
    /// Path to the commits directory (typically `.nib/commits`)
    path: Box<Path>,
}

impl CommitStore {
    pub fn new(path: Box<Path>) -> Self {
        CommitStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot_path(&self, id: CommitId) -> PathBuf {
        self.path.join(id.snapshot_dir_name())
    }

    pub fn snapshot_count(&self) -> RepositoryResult<usize> {
        if !self.path.exists() {
            return Ok(0);
        }

        let mut count = 0;
        for entry in WalkDir::new(&self.path).min_depth(1).max_depth(1) {
            if entry.map_err(std::io::Error::from)?.file_type().is_dir() {
                count += 1;
            }
        }

        Ok(count)
    }

    /// Id the next commit will get, derived from the total snapshot count
    pub fn next_id(&self) -> RepositoryResult<CommitId> {
        Ok(CommitId::next_after(self.snapshot_count()?))
    }

    /// Create the snapshot for `id` holding exactly `blobs`
    ///
    /// Fails if a snapshot with that id already exists.
    pub fn write_snapshot(&self, id: CommitId, blobs: &[Blob]) -> RepositoryResult<()> {
        std::fs::create_dir_all(&self.path)?;

        let snapshot_path = self.snapshot_path(id);
        std::fs::create_dir(&snapshot_path)?;

        for blob in blobs {
            blob.write_into(&snapshot_path)?;
        }

        Ok(())
    }

    /// Write the snapshot for `id`, then run `register` to record it
    ///
    /// When `register` fails the snapshot is removed again, so a commit that
    /// never reached the registry does not use up its id.
    pub fn write_snapshot_then<T>(
        &self,
        id: CommitId,
        blobs: &[Blob],
        register: impl FnOnce() -> RepositoryResult<T>,
    ) -> RepositoryResult<T> {
        self.write_snapshot(id, blobs)?;

        register().inspect_err(|_| {
            if let Err(err) = std::fs::remove_dir_all(self.snapshot_path(id)) {
                warn!(commit = %id, error = %err, "failed to remove orphaned snapshot");
            }
        })
    }

    /// File names inside a snapshot, sorted; `None` when the snapshot is missing
    pub fn snapshot_names(&self, id: CommitId) -> RepositoryResult<Option<Vec<String>>> {
        let snapshot_path = self.snapshot_path(id);
        if !snapshot_path.is_dir() {
            return Ok(None);
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&snapshot_path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        Ok(Some(names))
    }

    pub fn read_blob(&self, id: CommitId, name: &str) -> RepositoryResult<Option<Blob>> {
        let file_path = self.snapshot_path(id).join(name);
        if !file_path.is_file() {
            return Ok(None);
        }

        Ok(Some(Blob::read(&file_path)?))
    }
}
