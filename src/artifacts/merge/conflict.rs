use crate::artifacts::commit::commit_record::CommitId;
use serde::Serialize;

/// File names judged to differ between two branches
///
/// Derived on demand and never persisted. Names keep the order in which they
/// were first found and appear at most once. Source commits whose snapshot
/// was missing on disk are listed separately, since their files were never
/// compared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConflictSet {
    files: Vec<String>,
    #[serde(skip)]
    missing_snapshots: Vec<CommitId>,
}

impl ConflictSet {
    pub fn insert(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }

        self.files.push(name.to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.iter().any(|file| file == name)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn skip_snapshot(&mut self, id: CommitId) {
        self.missing_snapshots.push(id);
    }

    pub fn missing_snapshots(&self) -> &[CommitId] {
        &self.missing_snapshots
    }
}

impl<S: Into<String>> FromIterator<S> for ConflictSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ConflictSet::default();
        for name in iter {
            let name: String = name.into();
            set.insert(&name);
        }
        set
    }
}
