//! # Resize Settings
//!
//! The per-output settings a media provider attaches to each thumbnail
//! format. Providers historically carried these as loose key/value bags;
//! here they are a typed struct with explicit optional fields.
//!
//! `width` is semantically required, but stays `Option` in the type: the
//! settings arrive from external provider configuration, and a missing width
//! must surface as a diagnosable resize error, not as a parse failure.
//!
//! # Example
//! ```rust
//! use media_resizer::resize::settings::ResizeSettings;
//!
//! let settings = ResizeSettings::new(200).with_height(100).with_quality(80);
//! assert_eq!(settings.width, Some(200));
//! assert_eq!(settings.height, Some(100));
//!
//! let from_json: ResizeSettings = serde_json::from_str(r#"{"width": 640}"#).unwrap();
//! assert_eq!(from_json.width, Some(640));
//! assert_eq!(from_json.height, None);
//! ```

use serde::Deserialize;

/// Settings for one derived output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResizeSettings {
    /// Target width in pixels. Required by the resizer; validated at use.
    pub width: Option<u32>,
    /// Target height in pixels. Its presence requests the square crop.
    pub height: Option<u32>,
    /// Encoder quality (1-100). Required on the encode path only.
    pub quality: Option<u8>,
}

impl ResizeSettings {
    /// Creates settings with the given width, no height, and no quality.
    pub fn new(width: u32) -> Self {
        Self {
            width: Some(width),
            height: None,
            quality: None,
        }
    }

    /// Sets the target height, requesting the square crop.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Sets the encoder quality.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }
}
