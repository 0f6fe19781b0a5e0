//! # Resize Errors
//!
//! Error types raised by the resizing pipeline before any pixel work happens.
//!
//! Both types are plain `thiserror` structs, surfaced through `anyhow` at the
//! [`Resizer`](crate::resize::resizer::Resizer) boundary so callers can
//! `downcast_ref` when they need to distinguish them.
//!
//! # Example
//! ```
//! use media_resizer::error::resize::MissingParameterError;
//!
//! let err = MissingParameterError::new("width", Some("default"), Some("image"));
//! assert_eq!(
//!     err.to_string(),
//!     "width parameter is missing in context \"default\" for provider \"image\""
//! );
//! ```

use thiserror::Error;

/// A required settings parameter was absent.
///
/// Carries the media's context and provider identifiers so the message is
/// actionable when it bubbles up from a batch of thumbnail generations.
///
/// # Design
/// - No dependency on the codec or storage layers
/// - Absent identifiers render as empty strings, never as `None`
#[derive(Debug, Error)]
#[error("{parameter} parameter is missing in context \"{context}\" for provider \"{provider}\"")]
pub struct MissingParameterError {
    /// Name of the missing parameter (e.g. `"width"`).
    pub parameter: &'static str,
    /// Media context identifier, empty when unknown.
    pub context: String,
    /// Media provider identifier, empty when unknown.
    pub provider: String,
}

impl MissingParameterError {
    /// Creates a new `MissingParameterError` for the given parameter.
    pub fn new(parameter: &'static str, context: Option<&str>, provider: Option<&str>) -> Self {
        Self {
            parameter,
            context: context.unwrap_or_default().to_string(),
            provider: provider.unwrap_or_default().to_string(),
        }
    }
}

/// Settings or source dimensions that cannot be processed safely.
///
/// Raised instead of letting a zero width reach the scaling division or a
/// missing quality reach the encoder.
#[derive(Debug, Error)]
#[error("invalid resize settings: {reason}")]
pub struct InvalidSettingsError {
    /// Human-readable description of what was rejected.
    pub reason: String,
}

impl InvalidSettingsError {
    /// Creates a new `InvalidSettingsError` with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
