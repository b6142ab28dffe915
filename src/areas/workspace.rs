use crate::artifacts::objects::blob::Blob;
use crate::error::{RepositoryError, RepositoryResult};
use derive_new::new;
use std::path::{Path, PathBuf};

/// The user's working directory, where files to stage are read from
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute paths are kept, relative ones are taken from the workspace root
    pub fn resolve(&self, file_path: &Path) -> PathBuf {
        if file_path.is_absolute() {
            file_path.to_path_buf()
        } else {
            self.path.join(file_path)
        }
    }

    /// Name the file will have once staged: its last path component
    pub fn staged_name(file_path: &Path) -> RepositoryResult<String> {
        file_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| RepositoryError::FileNotFound(file_path.to_path_buf()))
    }

    pub fn parse_blob(&self, file_path: &Path) -> RepositoryResult<Blob> {
        let path = self.resolve(file_path);

        if !path.is_file() {
            return Err(RepositoryError::FileNotFound(file_path.to_path_buf()));
        }

        Ok(Blob::read(&path)?)
    }
}
