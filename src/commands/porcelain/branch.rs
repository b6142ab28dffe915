use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::error::RepositoryResult;
use colored::Colorize;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchListing {
    pub name: String,
    pub is_current: bool,
}

impl Repository {
    /// Create `name` with a copy of the current branch's history
    #[instrument(skip(self))]
    pub fn create_branch(&self, name: &str) -> RepositoryResult<()> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(name.to_string())?;
        let source = self.current_branch().clone();

        let mut branches = self.branches().load()?;
        branches.fork(branch_name.as_ref(), source.as_ref())?;
        self.branches().store(&branches)?;

        info!(from = %source, "branch created");
        writeln!(self.writer(), "Branch {} created.", branch_name)?;

        Ok(())
    }

    /// Every branch in name order, with the checked-out one flagged
    pub fn list_branches(&self) -> RepositoryResult<Vec<BranchListing>> {
        self.ensure_initialized()?;

        let branches = self.branches().load()?;
        let current = self.current_branch();

        Ok(branches
            .names()
            .map(|name| BranchListing {
                name: name.to_string(),
                is_current: name == current.as_ref(),
            })
            .collect())
    }

    pub fn show_branches(&self) -> RepositoryResult<()> {
        for listing in self.list_branches()? {
            if listing.is_current {
                writeln!(self.writer(), "* {}", listing.name.green())?;
            } else {
                writeln!(self.writer(), "  {}", listing.name)?;
            }
        }

        Ok(())
    }
}
