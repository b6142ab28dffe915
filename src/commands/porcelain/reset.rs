use crate::areas::repository::Repository;
use crate::error::RepositoryResult;
use tracing::instrument;

impl Repository {
    /// Empty the staging area unconditionally
    #[instrument(skip(self))]
    pub async fn reset(&self) -> RepositoryResult<()> {
        self.ensure_initialized()?;

        let staging = self.staging();
        let staging = staging.lock().await;
        staging.reset()?;

        writeln!(
            self.writer(),
            "Staging area reset for -> {}.",
            self.current_branch()
        )?;

        Ok(())
    }
}
