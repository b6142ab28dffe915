use crate::areas::repository::Repository;
use crate::artifacts::commit::commit_record::CommitRecord;
use crate::error::RepositoryResult;

impl Repository {
    /// Commit records of `branch` in the order they were appended
    pub fn history(&self, branch: &str) -> RepositoryResult<Vec<CommitRecord>> {
        self.ensure_initialized()?;

        Ok(self.branches().load()?.history(branch)?.to_vec())
    }

    /// Print the history of `branch`, or of the current branch when `None`
    pub fn log(&self, branch: Option<&str>) -> RepositoryResult<()> {
        let branch = match branch {
            Some(name) => name.to_string(),
            None => self.current_branch().to_string(),
        };
        let records = self.history(&branch)?;

        writeln!(self.writer(), "History for branch {}:", branch)?;
        for record in records {
            writeln!(self.writer(), "Commit {} | {}", record.id, record.message)?;
            writeln!(self.writer(), "Timestamp: {}", record.display_timestamp())?;
        }

        Ok(())
    }
}
