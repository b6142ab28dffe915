use crate::areas::repository::Repository;
use crate::error::RepositoryResult;
use colored::Colorize;

impl Repository {
    /// Print the current branch and the staged files
    pub async fn status(&self) -> RepositoryResult<Vec<String>> {
        let staged = self.staged_files().await?;

        writeln!(self.writer(), "On branch {}", self.current_branch())?;
        if staged.is_empty() {
            writeln!(self.writer(), "Nothing staged.")?;
        } else {
            writeln!(self.writer(), "Staged files:")?;
            for name in &staged {
                writeln!(self.writer(), "    {}", name.green())?;
            }
        }

        Ok(staged)
    }
}
