//! # File Contracts
//!
//! Byte-source and byte-sink abstractions the resizer reads from and writes
//! to. The surrounding platform decides what backs them (local filesystem,
//! object storage, a test buffer); the resizer only sees these traits.
//!
//! This module defines:
//! - [`FileSource`] — readable byte source.
//! - [`FileSink`] — writable byte sink with an attached [`Metadata`] map.
//! - [`MemoryFile`] — in-memory implementation of both, used in tests and
//!   wherever no real storage is involved.
//!
//! # Example
//! ```rust
//! use media_resizer::media::file::{FileSink, FileSource, MemoryFile, Metadata};
//!
//! let file = MemoryFile::with_content("thumb_50x50.jpg", b"bytes".to_vec());
//! assert_eq!(file.content().unwrap(), b"bytes");
//!
//! file.set_content(b"new bytes", Metadata::new()).unwrap();
//! assert_eq!(file.content().unwrap(), b"new bytes");
//! assert_eq!(file.name(), "thumb_50x50.jpg");
//! ```

use std::sync::Mutex;

use anyhow::{Result, bail};

/// Opaque key/value attachment stored alongside a written file.
///
/// Backends interpret it as they see fit (e.g. object-storage headers);
/// filesystem backends may have nowhere to put it.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A readable byte source.
pub trait FileSource: Send + Sync {
    /// Returns the full content of the file.
    ///
    /// # Errors
    /// Returns an [`anyhow::Error`] if the content cannot be read.
    fn content(&self) -> Result<Vec<u8>>;
}

/// A writable byte sink.
///
/// Typical implementations include local filesystem files, object-storage
/// keys, and in-memory buffers for tests.
pub trait FileSink: Send + Sync {
    /// Name of the output file (e.g. `"thumb_news_small.jpg"`), used to
    /// build its metadata.
    fn name(&self) -> &str;

    /// Replaces the file content and attaches the given metadata.
    ///
    /// # Errors
    /// Returns an [`anyhow::Error`] if writing fails. On error nothing is
    /// expected to have been written.
    fn set_content(&self, bytes: &[u8], metadata: Metadata) -> Result<()>;
}

/// An in-memory file implementing both [`FileSource`] and [`FileSink`].
#[derive(Debug, Default)]
pub struct MemoryFile {
    name: String,
    stored: Mutex<Option<(Vec<u8>, Metadata)>>,
}

impl MemoryFile {
    /// Creates an empty file with the given name.
    ///
    /// Reading it before any [`set_content`](FileSink::set_content) fails.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stored: Mutex::new(None),
        }
    }

    /// Creates a file pre-populated with content and empty metadata.
    pub fn with_content(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            stored: Mutex::new(Some((bytes, Metadata::new()))),
        }
    }

    /// Returns a copy of the stored content and metadata, if any.
    pub fn stored(&self) -> Option<(Vec<u8>, Metadata)> {
        self.stored.lock().unwrap().clone()
    }
}

impl FileSource for MemoryFile {
    fn content(&self) -> Result<Vec<u8>> {
        match &*self.stored.lock().unwrap() {
            Some((bytes, _)) => Ok(bytes.clone()),
            None => bail!("memory file {:?} has no content", self.name),
        }
    }
}

impl FileSink for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_content(&self, bytes: &[u8], metadata: Metadata) -> Result<()> {
        *self.stored.lock().unwrap() = Some((bytes.to_vec(), metadata));
        Ok(())
    }
}
