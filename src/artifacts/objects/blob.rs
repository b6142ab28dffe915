//! Stored file content
//!
//! A blob is an exact byte copy of one file, keyed by its bare file name.
//! There is no hashing and no deduplication: the staging area and every
//! commit snapshot hold their own copy.

use bytes::Bytes;
use derive_new::new;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    /// File name inside the staging area or snapshot
    name: String,
    /// Raw file content
    data: Bytes,
}

impl Blob {
    /// Read the file at `path`, naming the blob after its last component
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("path has no file name: {}", path.display()),
                )
            })?;
        let data = std::fs::read(path)?;

        Ok(Self::new(name, Bytes::from(data)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Write the content to `dir/<name>`, replacing any existing file
    pub fn write_into(&self, dir: &Path) -> std::io::Result<()> {
        std::fs::write(dir.join(&self.name), &self.data)
    }

    /// Exact byte comparison, ignoring names
    pub fn same_content(&self, other: &Blob) -> bool {
        self.data == other.data
    }
}
