//! # Image Codec Implementation (image-rs)
//!
//! Provides an [`ImageAdapter`] implementation using the [`image`] crate.
//!
//! Supports **JPEG**, **PNG**, and **GIF** output. The input format is
//! guessed from the byte stream, so any format the `image` crate can decode
//! is accepted as a source.
//!
//! # Example
//! ```rust,no_run
//! use media_resizer::codec::adapter::{ImageAdapter, ResizeMode};
//! use media_resizer::codec::image_rs_adapter::ImageRsAdapter;
//! use media_resizer::geometry::Size;
//!
//! let adapter = ImageRsAdapter::default();
//! let bytes = std::fs::read("input.png").unwrap();
//!
//! let image = adapter.load(&bytes).unwrap();
//! let thumb = image.thumbnail(Size::new(200, 200), ResizeMode::Inset);
//! std::fs::write("thumb.jpg", thumb.encode("jpeg", 80).unwrap()).unwrap();
//! ```
//!
//! # Errors
//! Returns an [`anyhow::Error`] if:
//! - the input format cannot be guessed or decoded,
//! - a crop window exceeds the image bounds,
//! - the output format is not one of the supported names.

use std::io::Cursor;

use anyhow::{Context, Result, bail};
use image::codecs::jpeg::JpegEncoder;
use image::{
    ColorType, DynamicImage, ExtendedColorType, GenericImageView, ImageFormat, ImageReader,
    imageops::FilterType,
};
use tracing::debug;

use super::adapter::{ImageAdapter, ImageHandle, ResizeMode};
use crate::geometry::{Point, Size};

/// A concrete [`ImageAdapter`] backed by the `image` crate.
#[derive(Clone, Debug, Default)]
pub struct ImageRsAdapter;

impl ImageAdapter for ImageRsAdapter {
    fn load(&self, bytes: &[u8]) -> Result<Box<dyn ImageHandle>> {
        let image = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .context("guess format")?
            .decode()
            .context("decode image")?;
        Ok(Box::new(ImageRsHandle { image }))
    }
}

struct ImageRsHandle {
    image: DynamicImage,
}

impl ImageHandle for ImageRsHandle {
    fn size(&self) -> Size {
        let (w, h) = self.image.dimensions();
        Size::new(w, h)
    }

    fn crop(self: Box<Self>, origin: Point, to: Size) -> Result<Box<dyn ImageHandle>> {
        let current = self.size();
        if origin.x + to.width > current.width || origin.y + to.height > current.height {
            bail!("crop window {to} at {origin} exceeds image bounds {current}");
        }
        debug!(%origin, %to, "cropping");
        Ok(Box::new(ImageRsHandle {
            image: self.image.crop_imm(origin.x, origin.y, to.width, to.height),
        }))
    }

    fn thumbnail(self: Box<Self>, to: Size, mode: ResizeMode) -> Box<dyn ImageHandle> {
        debug!(%to, ?mode, "scaling down");
        let image = match mode {
            ResizeMode::Inset => self.image.resize(to.width, to.height, FilterType::Triangle),
            ResizeMode::Outbound => {
                self.image
                    .resize_to_fill(to.width, to.height, FilterType::Triangle)
            }
        };
        Box::new(ImageRsHandle { image })
    }

    fn encode(&self, format: &str, quality: u8) -> Result<Vec<u8>> {
        let (w, h) = self.image.dimensions();
        let mut out = Vec::new();
        let mut cur = Cursor::new(&mut out);

        match format.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => {
                let rgb = self.image.to_rgb8();
                let mut enc = JpegEncoder::new_with_quality(&mut cur, quality.clamp(1, 100));
                enc.encode(rgb.as_raw(), w, h, ExtendedColorType::Rgb8)
                    .context("encode jpeg")?;
            }
            "png" => {
                // PNG is lossless; quality is accepted and ignored.
                let rgba = self.image.to_rgba8();
                image::write_buffer_with_format(
                    &mut cur,
                    &rgba,
                    w,
                    h,
                    ColorType::Rgba8,
                    ImageFormat::Png,
                )
                .context("encode png")?;
            }
            "gif" => {
                let rgba = self.image.to_rgba8();
                DynamicImage::ImageRgba8(rgba)
                    .write_to(&mut cur, ImageFormat::Gif)
                    .context("encode gif")?;
            }
            other => bail!("unsupported output format: {other}"),
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};

    fn make_png(w: u32, h: u32) -> Vec<u8> {
        let img: ImageBuffer<Rgba<u8>, _> = ImageBuffer::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 255])
            }
        });
        let mut cur = Cursor::new(Vec::new());
        image::write_buffer_with_format(
            &mut cur,
            img.as_raw(),
            w,
            h,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .expect("encode png");
        cur.into_inner()
    }

    #[test]
    fn load_reports_decoded_dimensions() {
        let adapter = ImageRsAdapter;
        let image = adapter.load(&make_png(64, 32)).expect("load");
        assert_eq!(image.size(), Size::new(64, 32));
    }

    #[test]
    fn load_fails_on_garbage_bytes() {
        let adapter = ImageRsAdapter;
        assert!(adapter.load(&[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn crop_produces_requested_window() {
        let adapter = ImageRsAdapter;
        let image = adapter.load(&make_png(100, 50)).expect("load");

        let cropped = image
            .crop(Point::new(25, 0), Size::new(50, 50))
            .expect("crop");
        assert_eq!(cropped.size(), Size::new(50, 50));
    }

    #[test]
    fn crop_out_of_bounds_is_rejected() {
        let adapter = ImageRsAdapter;
        let image = adapter.load(&make_png(10, 10)).expect("load");

        // Handles are not Debug, so pull the error out without formatting
        // the Ok side.
        let err = image
            .crop(Point::new(5, 0), Size::new(10, 10))
            .err()
            .expect("out-of-bounds crop must fail");
        assert!(format!("{err:#}").contains("exceeds image bounds"));
    }

    #[test]
    fn thumbnail_inset_fits_within_box() {
        let adapter = ImageRsAdapter;
        let image = adapter.load(&make_png(2000, 1000)).expect("load");

        let thumb = image.thumbnail(Size::new(200, 100), ResizeMode::Inset);
        assert_eq!(thumb.size(), Size::new(200, 100));
    }

    #[test]
    fn thumbnail_outbound_covers_box() {
        let adapter = ImageRsAdapter;
        let image = adapter.load(&make_png(400, 100)).expect("load");

        let thumb = image.thumbnail(Size::new(50, 50), ResizeMode::Outbound);
        assert_eq!(thumb.size(), Size::new(50, 50));
    }

    #[test]
    fn encode_jpeg_has_magic_bytes_and_round_trips() {
        let adapter = ImageRsAdapter;
        let image = adapter.load(&make_png(40, 30)).expect("load");

        let out = image.encode("jpeg", 80).expect("encode");
        assert!(out.len() >= 3);
        assert_eq!(&out[..3], &[0xFF, 0xD8, 0xFF]);

        let decoded = image::load_from_memory(&out).expect("decode jpeg");
        assert_eq!(decoded.dimensions(), (40, 30));
    }

    #[test]
    fn encode_png_and_gif_round_trip() {
        let adapter = ImageRsAdapter;

        for format in ["png", "gif"] {
            let image = adapter.load(&make_png(16, 8)).expect("load");
            let out = image.encode(format, 100).expect("encode");
            let decoded = image::load_from_memory(&out).expect("decode");
            assert_eq!(decoded.dimensions(), (16, 8), "format {format}");
        }
    }

    #[test]
    fn encode_unsupported_format_fails() {
        let adapter = ImageRsAdapter;
        let image = adapter.load(&make_png(4, 4)).expect("load");

        let err = image.encode("webp", 80).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported output format"));
    }

    #[test]
    fn handle_can_be_encoded_twice() {
        let adapter = ImageRsAdapter;
        let image = adapter.load(&make_png(8, 8)).expect("load");

        let a = image.encode("png", 100).expect("first");
        let b = image.encode("jpeg", 80).expect("second");
        assert_ne!(a, b);
    }
}
