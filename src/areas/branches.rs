//! Branch registry
//!
//! The registry is the single source of truth for history. It lives in
//! `branches.json`, a mapping from branch name to the ordered list of commit
//! records of that branch:
//!
//! ```text
//! {
//!     "main": [
//!         {
//!             "id": 1,
//!             "message": "Initial commit",
//!             "timestamp": "2024-01-01 12:00:00"
//!         }
//!     ]
//! }
//! ```
//!
//! The checked-out branch is kept next to it in `HEAD`, a single line holding
//! the branch name.
//!
//! ## Locking
//!
//! Reads take a shared lock and writes an exclusive lock on the file being
//! accessed. Operations that read, modify and write the registry are still not
//! atomic as a whole; only one process should use a repository at a time.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::branches::Branches;
use crate::error::{RepositoryError, RepositoryResult};
use derive_new::new;
use file_guard::Lock;
use serde::Serialize;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::{Path, PathBuf};

pub const BRANCHES_FILE: &str = "branches.json";
pub const HEAD_FILE: &str = "HEAD";

const JSON_INDENT: &[u8] = b"    ";

#[derive(Debug, new)]
pub struct BranchRegistry {
    /// Repository root holding `branches.json` and `HEAD`
    path: Box<Path>,
}

impl BranchRegistry {
    pub fn branches_path(&self) -> PathBuf {
        self.path.join(BRANCHES_FILE)
    }

    pub fn head_path(&self) -> PathBuf {
        self.path.join(HEAD_FILE)
    }

    pub fn exists(&self) -> bool {
        self.branches_path().is_file()
    }

    pub fn load(&self) -> RepositoryResult<Branches> {
        let path = self.branches_path();
        let content = read_locked(&path)?;

        serde_json::from_str(&content).map_err(|err| RepositoryError::CorruptedRegistry {
            path,
            reason: err.to_string(),
        })
    }

    pub fn store(&self, branches: &Branches) -> RepositoryResult<()> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        branches.serialize(&mut serializer)?;

        write_locked(&self.branches_path(), &buffer)
    }

    /// Branch recorded as checked out, if any
    pub fn read_head(&self) -> RepositoryResult<Option<BranchName>> {
        let path = self.head_path();
        if !path.is_file() {
            return Ok(None);
        }

        let content = read_locked(&path)?;
        let content = content.trim();
        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(BranchName::from_registry(content.to_string())))
    }

    pub fn write_head(&self, branch: &BranchName) -> RepositoryResult<()> {
        write_locked(&self.head_path(), branch.as_ref().as_bytes())
    }
}

fn read_locked(path: &Path) -> RepositoryResult<String> {
    let mut file = std::fs::OpenOptions::new().read(true).open(path)?;
    let mut lock = file_guard::lock(&mut file, Lock::Shared, 0, 1)?;

    let mut content = String::new();
    lock.deref_mut().read_to_string(&mut content)?;

    Ok(content)
}

fn write_locked(path: &Path, data: &[u8]) -> RepositoryResult<()> {
    // open as WRONLY | CREAT | TRUNC, then hold an exclusive lock while writing
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    let mut lock = file_guard::lock(&mut file, Lock::Exclusive, 0, 1)?;
    lock.deref_mut().write_all(data)?;

    Ok(())
}
