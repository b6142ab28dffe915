//! Staging area
//!
//! A single flat directory of files waiting for the next commit, shared by
//! every branch. It holds no metadata: a file is staged exactly when a file of
//! that name exists in the directory. The directory may be absent, which reads
//! as an empty staging area.

use crate::artifacts::objects::blob::Blob;
use crate::error::RepositoryResult;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug)]
pub struct StagingArea {
    /// Path to the staging directory (typically `.nib/staging`)
    path: Box<Path>,
}

impl StagingArea {
    pub fn new(path: Box<Path>) -> Self {
        StagingArea { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the staged files, sorted
    pub fn file_names(&self) -> RepositoryResult<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();

        Ok(names)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path.join(name).is_file()
    }

    pub fn is_empty(&self) -> RepositoryResult<bool> {
        Ok(self.file_names()?.is_empty())
    }

    /// Copy `blob` into the staging directory, creating it if needed
    pub fn add(&self, blob: &Blob) -> RepositoryResult<()> {
        std::fs::create_dir_all(&self.path)?;
        blob.write_into(&self.path)?;

        Ok(())
    }

    pub fn blobs(&self) -> RepositoryResult<Vec<Blob>> {
        self.file_names()?
            .iter()
            .map(|name| Ok(Blob::read(&self.path.join(name))?))
            .collect()
    }

    /// Empty the staging area, recreating the directory if it was missing
    pub fn reset(&self) -> RepositoryResult<()> {
        if self.path.exists() {
            std::fs::remove_dir_all(&self.path)?;
        }
        std::fs::create_dir_all(&self.path)?;

        Ok(())
    }
}
