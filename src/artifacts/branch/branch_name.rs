use crate::artifacts::branch::{DEFAULT_BRANCH, INVALID_BRANCH_NAME_REGEX};
use crate::error::{RepositoryError, RepositoryResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> RepositoryResult<Self> {
        if name.is_empty() {
            return Err(RepositoryError::InvalidBranchName(
                "branch name cannot be empty".to_string(),
            ));
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .map_err(|err| RepositoryError::InvalidBranchName(err.to_string()))?;

        if re.is_match(&name) {
            Err(RepositoryError::InvalidBranchName(name))
        } else {
            Ok(Self(name))
        }
    }

    /// Wrap a name already recorded in the registry or `HEAD`
    ///
    /// Registry keys are any unique string, so names written by other tools
    /// are accepted as they are. New branches go through `try_parse`.
    pub fn from_registry(name: String) -> Self {
        Self(name)
    }
}

impl Default for BranchName {
    fn default() -> Self {
        Self(DEFAULT_BRANCH.to_string())
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
