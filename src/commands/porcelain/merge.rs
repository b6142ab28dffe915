use crate::areas::repository::Repository;
use crate::artifacts::merge::report::{AppliedChanges, HistoryMerge};
use crate::error::RepositoryResult;
use tracing::{info, instrument, warn};

impl Repository {
    /// Append the whole history of `source` onto the current branch
    ///
    /// There is no common-ancestor search and no deduplication: merging the
    /// same branch twice lists its commits twice. The registry is written
    /// immediately, before any file content is touched.
    #[instrument(skip(self))]
    pub fn merge_branch(&self, source: &str) -> RepositoryResult<HistoryMerge> {
        self.ensure_initialized()?;

        let target = self.current_branch().clone();
        let mut branches = self.branches().load()?;
        let appended = branches.concat(target.as_ref(), source)?;
        self.branches().store(&branches)?;

        info!(appended, "history merged");
        writeln!(self.writer(), "Branch {} merged into {}.", source, target)?;

        Ok(HistoryMerge {
            source: source.to_string(),
            target: target.to_string(),
            appended,
        })
    }

    /// Copy the files of every commit of `source` into the staging area
    ///
    /// Commits are applied oldest first and a file is only copied when its
    /// name is not staged yet, so files already staged are never overwritten
    /// and the earliest commit of `source` wins among its own versions.
    /// Snapshots missing on disk are skipped with a warning.
    #[instrument(skip(self))]
    pub async fn apply_merge_changes(&self, source: &str) -> RepositoryResult<AppliedChanges> {
        self.ensure_initialized()?;

        let history = self.branches().load()?.history(source)?.to_vec();

        let staging = self.staging();
        let staging = staging.lock().await;
        let mut changes = AppliedChanges::default();

        for record in history {
            let Some(names) = self.commits().snapshot_names(record.id)? else {
                warn!(commit = %record.id, "snapshot missing, skipping");
                writeln!(
                    self.writer(),
                    "Warning: snapshot of commit {} is missing, skipped.",
                    record.id
                )?;
                changes.missing_snapshots.push(record.id);
                continue;
            };

            for name in names {
                if staging.contains(&name) {
                    changes.kept.push(name);
                    continue;
                }

                let Some(blob) = self.commits().read_blob(record.id, &name)? else {
                    warn!(commit = %record.id, file = %name, "snapshot file vanished, skipping");
                    continue;
                };

                staging.add(&blob)?;
                writeln!(
                    self.writer(),
                    "File {} merged from branch {}.",
                    name,
                    source
                )?;
                changes.applied.push(name);
            }
        }

        Ok(changes)
    }

    /// History merge followed by the content merge
    pub async fn merge(&self, source: &str) -> RepositoryResult<(HistoryMerge, AppliedChanges)> {
        let history = self.merge_branch(source)?;
        let changes = self.apply_merge_changes(source).await?;

        Ok((history, changes))
    }
}
