//! Commit metadata
//!
//! - `commit_record`: the `{id, message, timestamp}` entries stored per branch
//! - `timestamp`: UTC commit time formatting and the environment override

pub mod commit_record;
pub mod timestamp;

/// Prefix of every commit snapshot directory name
pub const SNAPSHOT_PREFIX: &str = "commit_";
