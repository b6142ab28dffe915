//! Command implementations
//!
//! Every user-facing operation lives under `porcelain`, one file per command,
//! as an `impl Repository` block.

pub mod porcelain;
