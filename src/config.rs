//! Runtime settings
//!
//! Settings come from CLI flags with environment fallbacks:
//!
//! - `NIB_DIR`: repository root, relative to the workspace (default `.nib`)
//! - `NIB_LOG`: tracing filter directives (default `warn`)
//! - `NIB_COMMIT_DATE`: fixed commit timestamp, see `artifacts::commit::timestamp`
//! - `NO_PAGER`: print `log` output directly instead of paging it

use derive_new::new;
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPOSITORY_DIR: &str = ".nib";
pub const REPOSITORY_DIR_ENV: &str = "NIB_DIR";
pub const LOG_ENV: &str = "NIB_LOG";
pub const NO_PAGER_ENV: &str = "NO_PAGER";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Settings {
    /// Directory user file paths are resolved against
    pub workspace: PathBuf,
    /// Repository root, absolute or relative to `workspace`
    pub repository_dir: PathBuf,
}

impl Settings {
    pub fn for_workspace(workspace: &Path) -> Self {
        Self::new(workspace.to_path_buf(), PathBuf::from(DEFAULT_REPOSITORY_DIR))
    }

    pub fn repository_root(&self) -> PathBuf {
        if self.repository_dir.is_absolute() {
            self.repository_dir.clone()
        } else {
            self.workspace.join(&self.repository_dir)
        }
    }
}

/// Page long output only for interactive sessions that did not opt out
pub fn use_pager() -> bool {
    std::env::var_os(NO_PAGER_ENV).is_none() && std::io::stdout().is_terminal()
}
