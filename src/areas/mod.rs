//! Repository storage areas
//!
//! Each area owns one location under the repository root (or the workspace):
//!
//! - `branches`: branch registry (`branches.json`) and the `HEAD` pointer
//! - `commits`: append-only commit snapshots (`commits/commit_<id>/`)
//! - `staging`: the single repository-wide staging area (`staging/`)
//! - `workspace`: the user's files, read when staging
//! - `repository`: the handle tying the areas together

pub mod branches;
pub mod commits;
pub mod repository;
pub mod staging;
pub mod workspace;
