use crate::areas::repository::Repository;
use crate::artifacts::merge::conflict::ConflictSet;
use crate::artifacts::merge::resolution::{Resolution, ResolutionStrategy};
use crate::error::RepositoryResult;
use tracing::{debug, instrument, warn};

impl Repository {
    /// Files of `source` whose bytes differ from the current branch's latest commit
    ///
    /// Every file of every commit of `source` is compared with the file of the
    /// same name in the current branch's newest commit, the one with the
    /// highest id. A file only conflicts when it exists on both sides. Source
    /// commits without a snapshot are skipped and listed in the result.
    /// Nothing is modified.
    #[instrument(skip(self))]
    pub fn detect_conflicts(&self, source: &str) -> RepositoryResult<ConflictSet> {
        self.ensure_initialized()?;

        let branches = self.branches().load()?;
        let incoming = branches.history(source)?;
        let current = self.current_branch().clone();

        let mut conflicts = ConflictSet::default();
        let Some(latest) = branches.latest(current.as_ref())? else {
            debug!("current branch has no commits");
            self.show_conflicts(&conflicts)?;
            return Ok(conflicts);
        };

        for record in incoming {
            let Some(names) = self.commits().snapshot_names(record.id)? else {
                warn!(commit = %record.id, "snapshot missing, skipping");
                writeln!(
                    self.writer(),
                    "Warning: snapshot of commit {} is missing, skipped.",
                    record.id
                )?;
                conflicts.skip_snapshot(record.id);
                continue;
            };

            for name in names {
                if conflicts.contains(&name) {
                    continue;
                }

                let theirs = self.commits().read_blob(record.id, &name)?;
                let ours = self.commits().read_blob(latest.id, &name)?;

                if let (Some(theirs), Some(ours)) = (theirs, ours)
                    && !theirs.same_content(&ours)
                {
                    debug!(file = %name, commit = %record.id, latest = %latest.id, "content differs");
                    conflicts.insert(&name);
                }
            }
        }

        self.show_conflicts(&conflicts)?;

        Ok(conflicts)
    }

    /// Report the strategy chosen for `conflicts`
    ///
    /// Only the choice is recorded and echoed: staged files, snapshots and the
    /// branch registry are left as they are.
    #[instrument(skip(self, conflicts), fields(files = conflicts.len()))]
    pub fn resolve_conflicts(
        &self,
        conflicts: &ConflictSet,
        strategy: ResolutionStrategy,
    ) -> RepositoryResult<Resolution> {
        if conflicts.is_empty() {
            writeln!(self.writer(), "No conflicts to resolve.")?;
        } else {
            writeln!(
                self.writer(),
                "Resolving {} conflict(s) with strategy '{}': {}.",
                conflicts.len(),
                strategy,
                strategy.describe()
            )?;
            for file in conflicts.files() {
                writeln!(self.writer(), "    {}", file)?;
            }
        }

        Ok(Resolution::for_conflicts(strategy, conflicts))
    }

    fn show_conflicts(&self, conflicts: &ConflictSet) -> RepositoryResult<()> {
        if conflicts.is_empty() {
            writeln!(self.writer(), "No conflicts detected.")?;
        } else {
            writeln!(self.writer(), "Conflicts detected in:")?;
            for file in conflicts.files() {
                writeln!(self.writer(), "    {}", file)?;
            }
        }

        Ok(())
    }
}
