//! # media_resizer
//!
//! Image-transformation policy for media platforms: derive a thumbnail from
//! a source image by optionally center-cropping it to a square and scaling
//! it down to a requested box, never upscaling past the source.
//!
//! The crate is the policy plus the seams it needs; the surrounding
//! platform supplies the collaborators:
//! - `media` — descriptors, byte sources/sinks, and metadata builders
//! - `codec` — the image decode/crop/scale/encode backend
//! - `resize` — settings, the [`Resizer`](resize::resizer::Resizer) trait,
//!   and the square-crop implementation
//! - `config` — deployment defaults (fit mode, encoder quality)
//!
//! ## Example usage (in another crate)
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use media_resizer::codec::image_rs_adapter::ImageRsAdapter;
//! use media_resizer::config::resize::ResizeConfig;
//! use media_resizer::geometry::Size;
//! use media_resizer::media::descriptor::Media;
//! use media_resizer::media::file::MemoryFile;
//! use media_resizer::media::metadata::ContentTypeMetadataBuilder;
//! use media_resizer::resize::resizer::Resizer;
//! use media_resizer::resize::settings::ResizeSettings;
//! use media_resizer::resize::square::SquareResizer;
//!
//! let cfg = ResizeConfig::from_env();
//! let resizer = SquareResizer::new(
//!     Arc::new(ImageRsAdapter),
//!     cfg.mode,
//!     Arc::new(ContentTypeMetadataBuilder),
//! );
//!
//! let media = Media::new(Size::new(1000, 500)).with_context("news");
//! let source = MemoryFile::with_content("in.png", std::fs::read("in.png").unwrap());
//! let output = MemoryFile::new("thumb_200.jpg");
//! let settings = ResizeSettings::new(200).with_height(100).with_quality(cfg.quality);
//!
//! resizer.resize(&media, &source, &output, "jpeg", &settings).unwrap();
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use image;
pub use serde;
pub use serde_json;
pub use thiserror;
pub use tracing;

// ===============================
// Public modules
// ===============================
pub mod codec;
pub mod config;
pub mod error;
pub mod geometry;
pub mod media;
pub mod resize;
