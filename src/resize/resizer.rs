//! # Resizer Abstraction
//!
//! Defines the interface every resizing policy implements: a byte-free
//! prediction of the output box, and the actual transformation from a source
//! file to an output sink.
//!
//! Keeping both operations on one trait guarantees a policy answers layout
//! questions (what size will this thumbnail be?) with the same arithmetic it
//! later applies to pixels.

use anyhow::Result;

use super::settings::ResizeSettings;
use crate::geometry::Size;
use crate::media::descriptor::MediaDescriptor;
use crate::media::file::{FileSink, FileSource};

/// A policy turning one source image into one derived output.
pub trait Resizer: Send + Sync {
    /// Computes the output dimensions without touching pixel data.
    ///
    /// Pure: identical inputs always yield identical results.
    ///
    /// # Errors
    /// Returns an [`anyhow::Error`] when the declared source dimensions make
    /// the computation impossible (zero width).
    fn predict_box(&self, media: &dyn MediaDescriptor, settings: &ResizeSettings) -> Result<Size>;

    /// Transforms `input` and writes the encoded result, with its metadata,
    /// to `output`.
    ///
    /// `format` is a lowercase output format name (`"jpeg"`, `"png"`, ...),
    /// interpreted by the codec adapter.
    ///
    /// # Errors
    /// Returns an [`anyhow::Error`] on invalid settings, decode failure, or
    /// sink failure. Nothing is written to `output` on any failure.
    fn resize(
        &self,
        media: &dyn MediaDescriptor,
        input: &dyn FileSource,
        output: &dyn FileSink,
        format: &str,
        settings: &ResizeSettings,
    ) -> Result<()>;
}
