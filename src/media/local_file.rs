//! # Local Files
//!
//! A [`FileSource`]/[`FileSink`] backed by the local filesystem.
//!
//! This module ensures that:
//! - parent directories are created automatically on write,
//! - relative paths are sanitized (no `..` traversal, no leading slash),
//! - all paths stay under a configured root directory.
//!
//! Commonly used for local development or single-host deployments. The local
//! filesystem has no metadata channel, so the metadata attachment is dropped
//! on write.
//!
//! # Example
//! ```rust,no_run
//! use media_resizer::media::file::{FileSink, FileSource, Metadata};
//! use media_resizer::media::local_file::LocalFile;
//!
//! let out = LocalFile::new("/var/www/uploads", "thumbs/avatar_50x50.jpg");
//! out.set_content(b"encoded", Metadata::new()).unwrap();
//! assert_eq!(out.content().unwrap(), b"encoded");
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::debug;

use super::file::{FileSink, FileSource, Metadata};

/// A file under a root directory, addressed by a sanitized relative path.
#[derive(Clone, Debug)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
}

impl LocalFile {
    /// Creates a handle for `rel_path` under `root`.
    ///
    /// # Behavior
    /// - Trims leading slashes from `rel_path`
    /// - Replaces `..` with `_` to avoid directory traversal
    ///
    /// # Example
    /// ```
    /// use media_resizer::media::local_file::LocalFile;
    ///
    /// let f = LocalFile::new("/data", "../secret.jpg");
    /// assert_eq!(f.name(), "_/secret.jpg");
    /// ```
    pub fn new<P: Into<PathBuf>>(root: P, rel_path: &str) -> Self {
        let safe = rel_path.trim_start_matches('/').replace("..", "_");
        Self {
            path: root.into().join(&safe),
            name: safe,
        }
    }

    /// Full path of the file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sanitized path relative to the root.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FileSource for LocalFile {
    fn content(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).with_context(|| format!("read {:?}", &self.path))
    }
}

impl FileSink for LocalFile {
    fn name(&self) -> &str {
        LocalFile::name(self)
    }

    /// Writes the bytes, creating parent directories as needed.
    ///
    /// The metadata attachment is dropped; plain files cannot carry it.
    fn set_content(&self, bytes: &[u8], metadata: Metadata) -> Result<()> {
        if !metadata.is_empty() {
            debug!(path = ?self.path, keys = metadata.len(), "dropping metadata on local write");
        }
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, bytes).with_context(|| format!("write {:?}", &self.path))
    }
}
