use crate::areas::repository::Repository;
use crate::areas::workspace::Workspace;
use crate::error::{RepositoryError, RepositoryResult};
use std::path::Path;
use tracing::{debug, instrument};

impl Repository {
    /// Copy a file into the staging area
    ///
    /// Only the file name is checked for duplicates: staging a file whose name
    /// is already staged is declined even when the content changed.
    #[instrument(skip(self), fields(path = %file_path.display()))]
    pub async fn stage(&self, file_path: &Path) -> RepositoryResult<()> {
        self.ensure_initialized()?;

        let name = Workspace::staged_name(file_path)?;

        let staging = self.staging();
        let staging = staging.lock().await;

        if staging.contains(&name) {
            return Err(RepositoryError::AlreadyStaged(name));
        }

        let blob = self.workspace().parse_blob(file_path)?;
        staging.add(&blob)?;

        debug!(name = blob.name(), bytes = blob.data().len(), "file staged");
        writeln!(
            self.writer(),
            "{} added to staging area.",
            file_path.display()
        )?;

        Ok(())
    }

    pub async fn staged_files(&self) -> RepositoryResult<Vec<String>> {
        self.ensure_initialized()?;

        let staging = self.staging();
        let staging = staging.lock().await;

        staging.file_names()
    }
}
