//! # Resize Configuration
//!
//! Deployment-level defaults for the resizing pipeline: the downscale fit
//! mode and the encoder quality to use when a thumbnail format does not set
//! its own.
//!
//! Loaded from environment variables:
//! - `MEDIA_RESIZE_MODE` — `"inset"` (default) or `"outbound"`
//! - `MEDIA_RESIZE_QUALITY` — 1-100, default 80
//!
//! Invalid or missing values fall back to the defaults.
//!
//! # Example
//! ```rust,no_run
//! use media_resizer::config::resize::ResizeConfig;
//!
//! let cfg = ResizeConfig::from_env();
//! println!("encoding at quality {}", cfg.quality);
//! ```

use crate::codec::adapter::ResizeMode;

/// Default encoder quality when none is configured.
pub const DEFAULT_QUALITY: u8 = 80;

/// Configuration for the resizing pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeConfig {
    /// Fit strategy applied when downscaling.
    pub mode: ResizeMode,
    /// Encoder quality (1-100) for formats without their own.
    pub quality: u8,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            mode: ResizeMode::Inset,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl ResizeConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_provider(|k| std::env::var(k).ok())
    }

    /// Reads the configuration through a custom provider function.
    ///
    /// Useful for testing or mocking environment sources.
    ///
    /// # Example
    /// ```
    /// use media_resizer::codec::adapter::ResizeMode;
    /// use media_resizer::config::resize::ResizeConfig;
    ///
    /// let cfg = ResizeConfig::from_provider(|_| Some("outbound".into()));
    /// assert_eq!(cfg.mode, ResizeMode::Outbound);
    /// ```
    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = provider("MEDIA_RESIZE_MODE")
            .and_then(|s| ResizeMode::parse(s.trim()))
            .unwrap_or_default();

        let quality = provider("MEDIA_RESIZE_QUALITY")
            .and_then(|s| s.trim().parse::<u8>().ok())
            .filter(|q| (1..=100).contains(q))
            .unwrap_or(DEFAULT_QUALITY);

        Self { mode, quality }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_for(mode: Option<&str>, quality: Option<&str>) -> impl Fn(&str) -> Option<String> {
        let mode = mode.map(String::from);
        let quality = quality.map(String::from);
        move |key| match key {
            "MEDIA_RESIZE_MODE" => mode.clone(),
            "MEDIA_RESIZE_QUALITY" => quality.clone(),
            _ => None,
        }
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = ResizeConfig::from_provider(provider_for(None, None));
        assert_eq!(cfg, ResizeConfig::default());
        assert_eq!(cfg.mode, ResizeMode::Inset);
        assert_eq!(cfg.quality, DEFAULT_QUALITY);
    }

    #[test]
    fn reads_mode_and_quality() {
        let cfg = ResizeConfig::from_provider(provider_for(Some("outbound"), Some("95")));
        assert_eq!(cfg.mode, ResizeMode::Outbound);
        assert_eq!(cfg.quality, 95);
    }

    #[test]
    fn values_are_trimmed() {
        let cfg = ResizeConfig::from_provider(provider_for(Some(" inset "), Some(" 60 ")));
        assert_eq!(cfg.mode, ResizeMode::Inset);
        assert_eq!(cfg.quality, 60);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = ResizeConfig::from_provider(provider_for(Some("stretch"), Some("abc")));
        assert_eq!(cfg, ResizeConfig::default());

        let cfg = ResizeConfig::from_provider(provider_for(None, Some("0")));
        assert_eq!(cfg.quality, DEFAULT_QUALITY);

        let cfg = ResizeConfig::from_provider(provider_for(None, Some("101")));
        assert_eq!(cfg.quality, DEFAULT_QUALITY);
    }

    #[test]
    fn from_env_reads_process_environment() {
        temp_env::with_vars(
            [
                ("MEDIA_RESIZE_MODE", Some("outbound")),
                ("MEDIA_RESIZE_QUALITY", Some("42")),
            ],
            || {
                let cfg = ResizeConfig::from_env();
                assert_eq!(cfg.mode, ResizeMode::Outbound);
                assert_eq!(cfg.quality, 42);
            },
        );
    }
}
