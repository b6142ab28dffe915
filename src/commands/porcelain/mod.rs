//! Repository operations
//!
//! Each file adds one group of operations to `Repository`:
//!
//! - `init`: create the repository root
//! - `stage` / `reset`: fill and empty the staging area
//! - `commit`: snapshot the staging area onto the current branch
//! - `branch` / `checkout`: create, list and switch branches
//! - `merge`: history merge and content merge
//! - `conflicts`: advisory conflict detection and strategy selection
//! - `history` / `status`: read-only views

pub mod branch;
pub mod checkout;
pub mod commit;
pub mod conflicts;
pub mod history;
pub mod init;
pub mod merge;
pub mod reset;
pub mod stage;
pub mod status;
