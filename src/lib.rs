//! A small local version-control engine
//!
//! Files are copied into a staging area, committed as immutable snapshots
//! numbered across the whole repository, and recorded on named branches whose
//! histories are plain ordered lists. Merging concatenates histories and
//! copies files into staging; conflict detection compares bytes against the
//! current branch's latest commit and only reports.
//!
//! On disk a repository root looks like:
//!
//! ```text
//! .nib/
//! ├── HEAD              current branch name
//! ├── branches.json     branch name -> [{id, message, timestamp}]
//! ├── commits/
//! │   └── commit_<id>/  flat copy of the staged files
//! └── staging/          files waiting for the next commit
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod error;

pub use areas::repository::Repository;
pub use error::{RepositoryError, RepositoryResult};
