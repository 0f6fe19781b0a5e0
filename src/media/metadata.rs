//! # Metadata Builders
//!
//! Builds the opaque [`Metadata`] attachment written alongside each output
//! file. What a backend does with it is its own business; object stores
//! typically map it to headers, filesystems drop it.
//!
//! This module defines:
//! - [`MetadataBuilder`] — the trait the resizer calls just before writing.
//! - [`NoopMetadataBuilder`] — always returns an empty map.
//! - [`ContentTypeMetadataBuilder`] — derives a `contentType` entry from the
//!   output name's extension.
//!
//! # Example
//! ```rust
//! use media_resizer::geometry::Size;
//! use media_resizer::media::descriptor::Media;
//! use media_resizer::media::metadata::{ContentTypeMetadataBuilder, MetadataBuilder};
//!
//! let media = Media::new(Size::new(100, 100));
//! let meta = ContentTypeMetadataBuilder.get(&media, "thumb_50x50.jpg");
//! assert_eq!(meta["contentType"], "image/jpeg");
//! ```

use serde_json::json;

use super::descriptor::MediaDescriptor;
use super::file::Metadata;

/// Produces the metadata attached to an output file.
pub trait MetadataBuilder: Send + Sync {
    /// Builds metadata for writing `name` on behalf of `media`.
    fn get(&self, media: &dyn MediaDescriptor, name: &str) -> Metadata;
}

/// A builder that attaches nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopMetadataBuilder;

impl MetadataBuilder for NoopMetadataBuilder {
    fn get(&self, _media: &dyn MediaDescriptor, _name: &str) -> Metadata {
        Metadata::new()
    }
}

/// A builder that records the output's content type, derived from the file
/// extension of the output name. Unknown extensions produce an empty map.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContentTypeMetadataBuilder;

impl MetadataBuilder for ContentTypeMetadataBuilder {
    fn get(&self, _media: &dyn MediaDescriptor, name: &str) -> Metadata {
        let ext = name.rsplit('.').next().unwrap_or_default();
        let content_type = match ext.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Some("image/jpeg"),
            "png" => Some("image/png"),
            "gif" => Some("image/gif"),
            _ => None,
        };

        let mut meta = Metadata::new();
        if let Some(ct) = content_type {
            meta.insert("contentType".into(), json!(ct));
        }
        meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::media::descriptor::Media;

    fn media() -> Media {
        Media::new(Size::new(10, 10))
    }

    #[test]
    fn noop_builder_returns_empty_map() {
        let meta = NoopMetadataBuilder.get(&media(), "thumb.jpg");
        assert!(meta.is_empty());
    }

    #[test]
    fn content_type_builder_maps_known_extensions() {
        let b = ContentTypeMetadataBuilder;
        assert_eq!(meta_ct(&b, "a.jpg"), Some("image/jpeg".into()));
        assert_eq!(meta_ct(&b, "a.JPEG"), Some("image/jpeg".into()));
        assert_eq!(meta_ct(&b, "a.png"), Some("image/png".into()));
        assert_eq!(meta_ct(&b, "dir/deep.name.gif"), Some("image/gif".into()));
    }

    #[test]
    fn content_type_builder_empty_for_unknown_extension() {
        let b = ContentTypeMetadataBuilder;
        assert!(b.get(&media(), "archive.tar").is_empty());
        assert!(b.get(&media(), "no_extension").is_empty());
    }

    fn meta_ct(b: &ContentTypeMetadataBuilder, name: &str) -> Option<String> {
        b.get(&media(), name)
            .get("contentType")
            .and_then(|v| v.as_str().map(String::from))
    }

    fn assert_send_sync<T: ?Sized + Send + Sync>() {}
    #[test]
    fn dyn_metadata_builder_is_send_sync() {
        assert_send_sync::<dyn MetadataBuilder>();
    }
}
