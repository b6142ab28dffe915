//! Repository value types
//!
//! - `branch`: branch names and the branch-to-history mapping
//! - `commit`: commit ids, records and timestamps
//! - `core`: shared output helpers (pager wrapper)
//! - `merge`: conflict sets, resolution strategies and merge reports
//! - `objects`: stored file content

pub mod branch;
pub mod commit;
pub mod core;
pub mod merge;
pub mod objects;
