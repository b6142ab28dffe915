use crate::artifacts::commit::SNAPSHOT_PREFIX;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Repository-wide commit number
///
/// Ids are assigned from the number of snapshots in the commit store, so they
/// are unique across every branch, not just the branch that made the commit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
#[serde(transparent)]
pub struct CommitId(u64);

impl CommitId {
    /// Id following a store that currently holds `snapshot_count` snapshots
    pub fn next_after(snapshot_count: usize) -> Self {
        Self(snapshot_count as u64 + 1)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Name of the snapshot directory holding this commit's files
    pub fn snapshot_dir_name(&self) -> String {
        format!("{SNAPSHOT_PREFIX}{}", self.0)
    }
}

impl std::fmt::Display for CommitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of a branch history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct CommitRecord {
    pub id: CommitId,
    pub message: String,
    /// `%Y-%m-%d %H:%M:%S` in UTC; empty for records written without one
    #[serde(default)]
    pub timestamp: String,
}

impl CommitRecord {
    pub fn display_timestamp(&self) -> &str {
        if self.timestamp.is_empty() {
            "N/A"
        } else {
            &self.timestamp
        }
    }
}
