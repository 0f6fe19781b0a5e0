//! # Square-Crop Resizer
//!
//! The resizing policy applied when a thumbnail format specifies both a
//! width and a height: the source is first cropped to a square with the
//! side of its shorter axis, then scaled down to the requested width. The
//! height value itself is ignored; its presence is what requests the crop.
//! A format with no height skips the crop and only scales.
//!
//! Whatever the settings say, the output never exceeds the (possibly
//! cropped) source dimensions. Upscale requests encode the source as-is.
//!
//! # Example
//! ```rust
//! use std::sync::Arc;
//!
//! use media_resizer::codec::adapter::ResizeMode;
//! use media_resizer::codec::image_rs_adapter::ImageRsAdapter;
//! use media_resizer::geometry::Size;
//! use media_resizer::media::descriptor::Media;
//! use media_resizer::media::metadata::NoopMetadataBuilder;
//! use media_resizer::resize::resizer::Resizer;
//! use media_resizer::resize::settings::ResizeSettings;
//! use media_resizer::resize::square::SquareResizer;
//!
//! let resizer = SquareResizer::new(
//!     Arc::new(ImageRsAdapter),
//!     ResizeMode::Inset,
//!     Arc::new(NoopMetadataBuilder),
//! );
//!
//! let media = Media::new(Size::new(1000, 500));
//! let settings = ResizeSettings::new(200).with_height(100);
//!
//! // 1000x500 is cropped to 500x500, then scaled to 200x200.
//! let out = resizer.predict_box(&media, &settings).unwrap();
//! assert_eq!(out, Size::new(200, 200));
//! ```

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use super::resizer::Resizer;
use super::settings::ResizeSettings;
use crate::codec::adapter::{ImageAdapter, ResizeMode};
use crate::error::resize::{InvalidSettingsError, MissingParameterError};
use crate::geometry::{Point, Size};
use crate::media::descriptor::MediaDescriptor;
use crate::media::file::{FileSink, FileSource};
use crate::media::metadata::MetadataBuilder;

/// Square-crop resizing policy.
///
/// Holds the codec adapter, the downscale fit mode, and the metadata
/// builder for output files. One instance is safe to share across threads;
/// each call owns its decoded image for its whole duration.
pub struct SquareResizer {
    adapter: Arc<dyn ImageAdapter>,
    mode: ResizeMode,
    metadata: Arc<dyn MetadataBuilder>,
}

impl SquareResizer {
    /// Creates a new `SquareResizer`.
    pub fn new(
        adapter: Arc<dyn ImageAdapter>,
        mode: ResizeMode,
        metadata: Arc<dyn MetadataBuilder>,
    ) -> Self {
        Self {
            adapter,
            mode,
            metadata,
        }
    }
}

/// Height that preserves the aspect ratio of `size` at the given width,
/// truncated toward zero. Computed in `u64` so large sources cannot
/// overflow.
fn scaled_height(width: u32, size: Size) -> u32 {
    (width as u64 * size.height as u64 / size.width as u64) as u32
}

impl Resizer for SquareResizer {
    fn predict_box(&self, media: &dyn MediaDescriptor, settings: &ResizeSettings) -> Result<Size> {
        let mut size = media.size();
        if size.width == 0 || size.height == 0 {
            return Err(InvalidSettingsError::new("source dimensions must be positive").into());
        }

        if settings.height.is_some() && !size.is_square() {
            let side = size.shorter();
            size = Size::new(side, side);
        }

        let width = settings.width.unwrap_or(0);
        let target_height = scaled_height(width, size);

        if target_height < size.height && width < size.width {
            return Ok(Size::new(width, target_height));
        }
        Ok(size)
    }

    fn resize(
        &self,
        media: &dyn MediaDescriptor,
        input: &dyn FileSource,
        output: &dyn FileSink,
        format: &str,
        settings: &ResizeSettings,
    ) -> Result<()> {
        let Some(width) = settings.width else {
            return Err(
                MissingParameterError::new("width", media.context(), media.provider_name()).into(),
            );
        };
        if width == 0 {
            return Err(InvalidSettingsError::new("width must be positive").into());
        }
        let Some(quality) = settings.quality else {
            return Err(InvalidSettingsError::new("quality is required when encoding").into());
        };

        // Declared dimensions, deliberately not re-derived from pixels, so
        // this path and predict_box agree.
        let mut size = media.size();
        if size.width == 0 || size.height == 0 {
            return Err(InvalidSettingsError::new("source dimensions must be positive").into());
        }

        let mut image = self.adapter.load(&input.content()?)?;

        if settings.height.is_some() && !size.is_square() {
            let side = size.shorter();
            let crop = size.longer() - side;
            // Horizontal crops are centered; vertical crops stay
            // top-aligned.
            let origin = if size.longer() == size.height {
                Point::new(0, 0)
            } else {
                Point::new(crop / 2, 0)
            };
            debug!(%size, %origin, side, "cropping to square");
            image = image.crop(origin, Size::new(side, side))?;
            size = image.size();
        }

        let target_height = scaled_height(width, size);
        let content = if target_height < size.height && width < size.width {
            let target = Size::new(width, target_height);
            debug!(%size, %target, mode = ?self.mode, "downscaling");
            image
                .thumbnail(target, self.mode)
                .encode(format, quality)?
        } else {
            // Upscale request; encode what we have.
            image.encode(format, quality)?
        };

        let metadata = self.metadata.get(media, output.name());
        output.set_content(&content, metadata)?;
        info!(output = output.name(), bytes = content.len(), "media resized");
        Ok(())
    }
}
