use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::branches::Branches;
use crate::error::RepositoryResult;
use std::fs;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    /// The root was already present and left untouched, whatever its state
    AlreadyExists,
}

impl Repository {
    #[instrument(skip(self), fields(root = %self.path().display()))]
    pub async fn init(&self) -> RepositoryResult<InitOutcome> {
        if self.path().exists() {
            info!("repository root already present");
            writeln!(
                self.writer(),
                "Repository already exists at {}",
                self.path().display()
            )?;
            return Ok(InitOutcome::AlreadyExists);
        }

        fs::create_dir_all(self.commits().path())?;
        {
            let staging = self.staging();
            let staging = staging.lock().await;
            staging.reset()?;
        }

        self.branches().store(&Branches::with_default_branch())?;

        let default_branch = BranchName::default();
        self.branches().write_head(&default_branch)?;
        self.set_current_branch(default_branch);

        info!("repository initialized");
        writeln!(
            self.writer(),
            "Initialized empty repository in {}",
            self.path().display()
        )?;

        Ok(InitOutcome::Created)
    }
}
