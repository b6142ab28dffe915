//! In-memory form of `branches.json`
//!
//! Maps each branch name to its ordered list of commit records. Histories are
//! plain values: creating a branch copies the source list, and merging appends
//! the whole source list to the target with no deduplication.

use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::commit::commit_record::CommitRecord;
use crate::error::{RepositoryError, RepositoryResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Branches {
    entries: BTreeMap<String, Vec<CommitRecord>>,
}

impl Branches {
    /// Registry written by `init`: a single empty `main` branch
    pub fn with_default_branch() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(DEFAULT_BRANCH.to_string(), Vec::new());
        Self { entries }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn history(&self, name: &str) -> RepositoryResult<&[CommitRecord]> {
        self.entries
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| RepositoryError::BranchNotFound(name.to_string()))
    }

    /// Most recent commit reachable from `name`
    ///
    /// Merges append older records after newer ones, so list position says
    /// nothing about age. Ids grow with every commit, so the highest id wins.
    pub fn latest(&self, name: &str) -> RepositoryResult<Option<&CommitRecord>> {
        Ok(self.history(name)?.iter().max_by_key(|record| record.id))
    }

    pub fn append(&mut self, name: &str, record: CommitRecord) -> RepositoryResult<()> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| RepositoryError::BranchNotFound(name.to_string()))?
            .push(record);

        Ok(())
    }

    /// Insert `name` holding a copy of `source`'s current history
    pub fn fork(&mut self, name: &str, source: &str) -> RepositoryResult<()> {
        if self.contains(name) {
            return Err(RepositoryError::BranchAlreadyExists(name.to_string()));
        }

        let history = self.history(source)?.to_vec();
        self.entries.insert(name.to_string(), history);

        Ok(())
    }

    /// Append every record of `source` onto `target`, in order
    ///
    /// Returns the number of records appended. Records already present in
    /// `target` are appended again.
    pub fn concat(&mut self, target: &str, source: &str) -> RepositoryResult<usize> {
        let incoming = self.history(source)?.to_vec();
        let count = incoming.len();

        self.entries
            .get_mut(target)
            .ok_or_else(|| RepositoryError::BranchNotFound(target.to_string()))?
            .extend(incoming);

        Ok(count)
    }
}
