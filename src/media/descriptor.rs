//! # Media Descriptors
//!
//! Describes the image being transformed without carrying its bytes.
//!
//! The resizer never re-derives dimensions from decoded pixels; it trusts the
//! declared [`Size`] the surrounding media platform recorded at upload time,
//! so the byte-free prediction path and the pixel path stay consistent.
//!
//! This module defines:
//! - [`MediaDescriptor`] — trait abstraction over whatever media record the
//!   platform uses.
//! - [`Media`] — a minimal concrete descriptor, convenient for tests and for
//!   callers without a richer media model.
//!
//! # Example
//! ```rust
//! use media_resizer::geometry::Size;
//! use media_resizer::media::descriptor::{Media, MediaDescriptor};
//!
//! let media = Media::new(Size::new(1000, 500))
//!     .with_context("news")
//!     .with_provider_name("image");
//!
//! assert_eq!(media.size(), Size::new(1000, 500));
//! assert_eq!(media.context(), Some("news"));
//! assert_eq!(media.provider_name(), Some("image"));
//! ```

use crate::geometry::Size;

/// A media record as seen by the resizer.
///
/// Implementors supply the declared pixel dimensions plus two identifiers
/// used only for error diagnostics.
pub trait MediaDescriptor: Send + Sync {
    /// Declared pixel dimensions of the source image.
    fn size(&self) -> Size;

    /// Context identifier the media belongs to, if any.
    fn context(&self) -> Option<&str>;

    /// Name of the provider managing the media, if any.
    fn provider_name(&self) -> Option<&str>;
}

/// A plain in-memory [`MediaDescriptor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Media {
    size: Size,
    context: Option<String>,
    provider_name: Option<String>,
}

impl Media {
    /// Creates a descriptor with the given declared dimensions and no
    /// context or provider identifiers.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            context: None,
            provider_name: None,
        }
    }

    /// Sets the context identifier.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Sets the provider name.
    pub fn with_provider_name(mut self, provider_name: impl Into<String>) -> Self {
        self.provider_name = Some(provider_name.into());
        self
    }
}

impl MediaDescriptor for Media {
    fn size(&self) -> Size {
        self.size
    }

    fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    fn provider_name(&self) -> Option<&str> {
        self.provider_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_new_has_no_identifiers() {
        let media = Media::new(Size::new(640, 480));
        assert_eq!(media.size(), Size::new(640, 480));
        assert_eq!(media.context(), None);
        assert_eq!(media.provider_name(), None);
    }

    #[test]
    fn media_builder_sets_identifiers() {
        let media = Media::new(Size::new(10, 10))
            .with_context("default")
            .with_provider_name("media.provider.image");

        assert_eq!(media.context(), Some("default"));
        assert_eq!(media.provider_name(), Some("media.provider.image"));
    }

    #[test]
    fn media_clone_and_equality() {
        let a = Media::new(Size::new(1, 2)).with_context("c");
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Media::new(Size::new(1, 2)));
    }

    fn assert_send_sync<T: ?Sized + Send + Sync>() {}
    #[test]
    fn dyn_media_descriptor_is_send_sync() {
        assert_send_sync::<dyn MediaDescriptor>();
    }
}
