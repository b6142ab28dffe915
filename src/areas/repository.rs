use crate::areas::branches::BranchRegistry;
use crate::areas::commits::CommitStore;
use crate::areas::staging::StagingArea;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::config::Settings;
use crate::error::{RepositoryError, RepositoryResult};
use std::cell::{Ref, RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const STAGING_DIR: &str = "staging";
pub const COMMITS_DIR: &str = "commits";

/// Handle on one repository root
///
/// Carries the current-branch pointer itself, so independent handles on
/// different roots never share state.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    staging: Arc<Mutex<StagingArea>>,
    commits: CommitStore,
    branches: BranchRegistry,
    workspace: Workspace,
    current_branch: RefCell<BranchName>,
}

impl Repository {
    /// Open a handle on `root` for files living in `workspace`
    ///
    /// Nothing is created on disk. The current branch is read back from the
    /// root's `HEAD` file when present and defaults to `main` otherwise.
    pub fn new(
        workspace: &Path,
        root: &Path,
        writer: Box<dyn std::io::Write>,
    ) -> RepositoryResult<Self> {
        let path = if root.is_absolute() {
            root.to_path_buf()
        } else {
            workspace.join(root)
        };

        let staging = StagingArea::new(path.join(STAGING_DIR).into_boxed_path());
        let commits = CommitStore::new(path.join(COMMITS_DIR).into_boxed_path());
        let branches = BranchRegistry::new(path.clone().into_boxed_path());
        let workspace = Workspace::new(workspace.to_path_buf().into_boxed_path());
        let current_branch = branches.read_head()?.unwrap_or_default();

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            staging: Arc::new(Mutex::new(staging)),
            commits,
            branches,
            workspace,
            current_branch: RefCell::new(current_branch),
        })
    }

    pub fn from_settings(
        settings: &Settings,
        writer: Box<dyn std::io::Write>,
    ) -> RepositoryResult<Self> {
        Self::new(&settings.workspace, &settings.repository_root(), writer)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn staging(&self) -> Arc<Mutex<StagingArea>> {
        self.staging.clone()
    }

    pub fn commits(&self) -> &CommitStore {
        &self.commits
    }

    pub fn branches(&self) -> &BranchRegistry {
        &self.branches
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn current_branch(&self) -> Ref<'_, BranchName> {
        self.current_branch.borrow()
    }

    pub fn set_current_branch(&self, branch: BranchName) {
        *self.current_branch.borrow_mut() = branch;
    }

    pub fn is_initialized(&self) -> bool {
        self.branches.exists()
    }

    pub(crate) fn ensure_initialized(&self) -> RepositoryResult<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(RepositoryError::NotInitialized(self.path.to_path_buf()))
        }
    }
}
