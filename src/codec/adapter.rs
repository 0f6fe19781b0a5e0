//! # Image Codec Abstractions
//!
//! Defines the seam between the resizing policy and the image library that
//! actually decodes, crops, scales, and encodes pixels.
//!
//! This module provides:
//! - [`ResizeMode`] — the fit strategy applied when downscaling.
//! - [`ImageHandle`] — one decoded image; crop and thumbnail consume the
//!   handle and return a new one, so a transformation chain owns its image
//!   at every step.
//! - [`ImageAdapter`] — a factory loading bytes into handles, allowing
//!   different codec backends behind a consistent API.
//!
//! # Example
//! ```rust
//! use anyhow::Result;
//! use media_resizer::codec::adapter::{ImageAdapter, ImageHandle, ResizeMode};
//! use media_resizer::geometry::{Point, Size};
//!
//! struct FakeImage(Size);
//!
//! impl ImageHandle for FakeImage {
//!     fn size(&self) -> Size {
//!         self.0
//!     }
//!     fn crop(self: Box<Self>, _origin: Point, to: Size) -> Result<Box<dyn ImageHandle>> {
//!         Ok(Box::new(FakeImage(to)))
//!     }
//!     fn thumbnail(self: Box<Self>, to: Size, _mode: ResizeMode) -> Box<dyn ImageHandle> {
//!         Box::new(FakeImage(to))
//!     }
//!     fn encode(&self, _format: &str, _quality: u8) -> Result<Vec<u8>> {
//!         Ok(vec![])
//!     }
//! }
//!
//! struct FakeAdapter;
//!
//! impl ImageAdapter for FakeAdapter {
//!     fn load(&self, _bytes: &[u8]) -> Result<Box<dyn ImageHandle>> {
//!         Ok(Box::new(FakeImage(Size::new(4, 4))))
//!     }
//! }
//!
//! let image = FakeAdapter.load(b"ignored").unwrap();
//! let cropped = image.crop(Point::new(0, 0), Size::new(2, 2)).unwrap();
//! assert_eq!(cropped.size(), Size::new(2, 2));
//! ```

use anyhow::Result;

use crate::geometry::{Point, Size};

/// Fit strategy used when scaling an image down to a target box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResizeMode {
    /// Shrink until the whole image fits inside the box.
    #[default]
    Inset,
    /// Shrink until the box is fully covered, cropping the overflow.
    Outbound,
}

impl ResizeMode {
    /// Parses a mode name (case-insensitive `"inset"` or `"outbound"`).
    ///
    /// # Example
    /// ```
    /// use media_resizer::codec::adapter::ResizeMode;
    ///
    /// assert_eq!(ResizeMode::parse("outbound"), Some(ResizeMode::Outbound));
    /// assert_eq!(ResizeMode::parse("fancy"), None);
    /// ```
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "inset" => Some(Self::Inset),
            "outbound" => Some(Self::Outbound),
            _ => None,
        }
    }
}

/// One decoded image.
///
/// Geometry operations consume the handle and return a new one; encoding
/// borrows it, so the same handle can be encoded more than once.
pub trait ImageHandle: Send {
    /// Current pixel dimensions, updated by crop and thumbnail.
    fn size(&self) -> Size;

    /// Crops to a `to`-sized window whose top-left corner is `origin`.
    ///
    /// # Errors
    /// Returns an [`anyhow::Error`] if the window exceeds the image bounds.
    fn crop(self: Box<Self>, origin: Point, to: Size) -> Result<Box<dyn ImageHandle>>;

    /// Scales down to fit `to` according to `mode`, preserving aspect ratio.
    fn thumbnail(self: Box<Self>, to: Size, mode: ResizeMode) -> Box<dyn ImageHandle>;

    /// Encodes the image in the given format at the given quality.
    ///
    /// Formats are lowercase names (`"jpeg"`/`"jpg"`, `"png"`, `"gif"`).
    /// Quality runs 1-100 and only applies to lossy formats.
    ///
    /// # Errors
    /// Returns an [`anyhow::Error`] for unsupported formats or encoder
    /// failures.
    fn encode(&self, format: &str, quality: u8) -> Result<Vec<u8>>;
}

/// A codec backend loading raw bytes into [`ImageHandle`]s.
pub trait ImageAdapter: Send + Sync {
    /// Decodes `bytes` into an image handle.
    ///
    /// # Errors
    /// Returns an [`anyhow::Error`] if the format cannot be guessed or the
    /// data cannot be decoded.
    fn load(&self, bytes: &[u8]) -> Result<Box<dyn ImageHandle>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_mode_parse_accepts_known_names() {
        assert_eq!(ResizeMode::parse("inset"), Some(ResizeMode::Inset));
        assert_eq!(ResizeMode::parse("INSET"), Some(ResizeMode::Inset));
        assert_eq!(ResizeMode::parse("Outbound"), Some(ResizeMode::Outbound));
    }

    #[test]
    fn resize_mode_parse_rejects_unknown_names() {
        assert_eq!(ResizeMode::parse(""), None);
        assert_eq!(ResizeMode::parse("cover"), None);
    }

    #[test]
    fn resize_mode_default_is_inset() {
        assert_eq!(ResizeMode::default(), ResizeMode::Inset);
    }

    fn assert_send_sync<T: ?Sized + Send + Sync>() {}
    fn assert_send<T: ?Sized + Send>() {}
    #[test]
    fn adapter_traits_have_expected_bounds() {
        assert_send_sync::<dyn ImageAdapter>();
        assert_send::<dyn ImageHandle>();
    }
}
