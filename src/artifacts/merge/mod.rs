//! Merge bookkeeping and conflict types
//!
//! - `conflict`: the advisory set of files whose bytes differ across branches
//! - `resolution`: strategy selection for a conflict set (no file mutation)
//! - `report`: what the history and content merge steps did

pub mod conflict;
pub mod report;
pub mod resolution;
