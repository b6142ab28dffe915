use crate::artifacts::commit::commit_record::CommitId;

/// Outcome of the history step of a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryMerge {
    pub source: String,
    pub target: String,
    /// Records appended to the target, duplicates included
    pub appended: usize,
}

/// Outcome of copying a branch's commit files into the staging area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedChanges {
    /// Files copied into staging, in the order they were applied
    pub applied: Vec<String>,
    /// Files left alone because staging already held that name
    pub kept: Vec<String>,
    /// Snapshots that were missing or unreadable on disk
    pub missing_snapshots: Vec<CommitId>,
}
