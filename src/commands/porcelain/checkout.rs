use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::error::{RepositoryError, RepositoryResult};
use tracing::{instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReport {
    pub branch: BranchName,
    /// Staged files dropped by the unconditional staging reset
    pub discarded: Vec<String>,
}

impl Repository {
    /// Staged files a checkout of `name` would discard
    ///
    /// Fails like `checkout` when the branch is unknown, so callers can
    /// validate the target before asking for confirmation. Nothing is changed.
    pub async fn checkout_preview(&self, name: &str) -> RepositoryResult<Vec<String>> {
        self.ensure_initialized()?;

        if !self.branches().load()?.contains(name) {
            return Err(RepositoryError::BranchNotFound(name.to_string()));
        }

        self.staged_files().await
    }

    /// Switch the current branch and reset the staging area
    ///
    /// Anything staged is discarded, whatever branch it was staged on. The
    /// discarded names are returned so callers can warn about them; use
    /// `checkout_preview` beforehand to ask for confirmation.
    #[instrument(skip(self))]
    pub async fn checkout(&self, name: &str) -> RepositoryResult<CheckoutReport> {
        self.ensure_initialized()?;

        let branches = self.branches().load()?;
        if !branches.contains(name) {
            return Err(RepositoryError::BranchNotFound(name.to_string()));
        }
        let target = BranchName::from_registry(name.to_string());

        let staging = self.staging();
        let staging = staging.lock().await;
        let discarded = staging.file_names()?;

        self.branches().write_head(&target)?;
        self.set_current_branch(target.clone());
        writeln!(self.writer(), "Switched to -> {}.", target)?;

        staging.reset()?;
        if !discarded.is_empty() {
            warn!(count = discarded.len(), "checkout discarded staged files");
        }
        writeln!(self.writer(), "Staging area reset for -> {}.", target)?;

        Ok(CheckoutReport {
            branch: target,
            discarded,
        })
    }
}
