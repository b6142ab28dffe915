use crate::areas::repository::Repository;
use crate::artifacts::commit::commit_record::CommitRecord;
use crate::artifacts::commit::timestamp;
use crate::error::{RepositoryError, RepositoryResult};
use tracing::{info, instrument};

impl Repository {
    /// Snapshot the staging area as a new commit on the current branch
    ///
    /// The id is one past the number of snapshots in the whole store, so it is
    /// unique across branches. On success the staging area is left empty.
    #[instrument(skip(self, message), fields(branch = %self.current_branch()))]
    pub async fn commit(&self, message: &str) -> RepositoryResult<CommitRecord> {
        self.ensure_initialized()?;

        let staging = self.staging();
        let staging = staging.lock().await;

        let blobs = staging.blobs()?;
        if blobs.is_empty() {
            return Err(RepositoryError::NothingToCommit);
        }

        let branch = self.current_branch().clone();
        let mut branches = self.branches().load()?;
        // reject an unknown current branch before the snapshot is written
        branches.history(branch.as_ref())?;

        let id = self.commits().next_id()?;
        let record = CommitRecord::new(id, message.to_string(), timestamp::load_from_env());

        self.commits().write_snapshot_then(id, &blobs, || {
            branches.append(branch.as_ref(), record.clone())?;
            self.branches().store(&branches)
        })?;
        staging.reset()?;

        info!(id = %id, files = blobs.len(), "commit created");
        writeln!(self.writer(), "Commit {} created: {}", id, record.message)?;

        Ok(record)
    }
}
