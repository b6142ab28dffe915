//! Repository error types
//!
//! Every failure a controller operation can report is defined here. Failures
//! in the user-reportable group are always raised before the operation has
//! mutated any persisted state, so re-invoking after one is safe.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// no repository root at the configured location
    #[error("not a repository (missing {0})")]
    NotInitialized(PathBuf),

    /// a file with the same name is already in the staging area
    #[error("file {0} is already staged")]
    AlreadyStaged(String),

    /// the file to stage does not exist or is not a regular file
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    /// commit requested with an empty staging area
    #[error("no files to commit, stage files first")]
    NothingToCommit,

    #[error("branch {0} already exists")]
    BranchAlreadyExists(String),

    #[error("branch {0} does not exist")]
    BranchNotFound(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    /// unrecognized conflict resolution strategy
    #[error("invalid resolution strategy '{given}', expected one of: {expected}")]
    InvalidStrategy { given: String, expected: String },

    /// the branches file exists but does not hold a valid registry
    #[error("corrupted branch registry at {path}: {reason}")]
    CorruptedRegistry { path: PathBuf, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RepositoryError {
    /// Failures the caller is expected to show to the user and move on from.
    pub fn is_user_reportable(&self) -> bool {
        matches!(
            self,
            RepositoryError::NotInitialized(_)
                | RepositoryError::AlreadyStaged(_)
                | RepositoryError::FileNotFound(_)
                | RepositoryError::NothingToCommit
                | RepositoryError::BranchAlreadyExists(_)
                | RepositoryError::BranchNotFound(_)
                | RepositoryError::InvalidBranchName(_)
        )
    }

    /// Rejected input, raised before any state is touched.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RepositoryError::InvalidStrategy { .. })
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
