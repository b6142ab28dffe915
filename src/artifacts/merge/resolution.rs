//! Conflict resolution policy
//!
//! Resolving a conflict set only selects and reports a strategy. Staged files,
//! snapshots and the branch registry are left exactly as they were, and any
//! actual reconciliation is done by re-staging files by hand.

use crate::artifacts::merge::conflict::ConflictSet;
use crate::error::{RepositoryError, RepositoryResult};
use derive_new::new;

const STRATEGY_ALIASES: phf::Map<&'static str, ResolutionStrategy> = phf::phf_map! {
    "ours" => ResolutionStrategy::KeepCurrent,
    "current" => ResolutionStrategy::KeepCurrent,
    "keep-current" => ResolutionStrategy::KeepCurrent,
    "theirs" => ResolutionStrategy::TakeIncoming,
    "incoming" => ResolutionStrategy::TakeIncoming,
    "take-incoming" => ResolutionStrategy::TakeIncoming,
    "manual" => ResolutionStrategy::Manual,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionStrategy {
    KeepCurrent,
    TakeIncoming,
    Manual,
}

impl ResolutionStrategy {
    /// Parse a strategy name or alias, case-insensitively
    pub fn try_parse(name: &str) -> RepositoryResult<Self> {
        STRATEGY_ALIASES
            .get(name.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| RepositoryError::InvalidStrategy {
                given: name.to_string(),
                expected: "ours, theirs, manual".to_string(),
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStrategy::KeepCurrent => "ours",
            ResolutionStrategy::TakeIncoming => "theirs",
            ResolutionStrategy::Manual => "manual",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ResolutionStrategy::KeepCurrent => "keep the current branch version",
            ResolutionStrategy::TakeIncoming => "take the incoming branch version",
            ResolutionStrategy::Manual => "resolve manually and re-stage the files",
        }
    }
}

impl std::str::FromStr for ResolutionStrategy {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl std::fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The strategy chosen for a set of conflicting files
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Resolution {
    pub strategy: ResolutionStrategy,
    pub files: Vec<String>,
}

impl Resolution {
    pub fn for_conflicts(strategy: ResolutionStrategy, conflicts: &ConflictSet) -> Self {
        Self::new(strategy, conflicts.files().to_vec())
    }
}
