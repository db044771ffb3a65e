//! Thumbnail extraction

use super::candidates::{EntrySource, first_present};
use serde::Serialize;

/// Thumbnail candidates, in lookup order
pub const THUMBNAIL_CANDIDATES: [&str; 4] = [
    "Metadata/thumbnail.png",
    "Metadata/thumbnail.jpg",
    "thumbnail.png",
    "thumbnail.jpg",
];

const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// Image format of a thumbnail, detected from its leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// JPEG / JFIF
    Jpeg,
    /// Anything else; the bytes are still returned untouched
    Unknown,
}

impl ImageFormat {
    /// Sniff the format from magic bytes
    pub fn from_magic_bytes(data: &[u8]) -> Self {
        if data.starts_with(&PNG_MAGIC) {
            ImageFormat::Png
        } else if data.starts_with(&JPEG_MAGIC) {
            ImageFormat::Jpeg
        } else {
            ImageFormat::Unknown
        }
    }

    /// MIME type for data URLs and HTTP responses
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Unknown => "application/octet-stream",
        }
    }
}

/// Return the bytes of the first thumbnail candidate present in the archive
///
/// A thumbnail is optional: absence yields `None`, and so does a failure to
/// read the first candidate present. Later candidates are not consulted then.
pub fn extract_thumbnail<S: EntrySource + ?Sized>(source: &mut S) -> Option<Vec<u8>> {
    match first_present(source, &THUMBNAIL_CANDIDATES)? {
        (name, Ok(data)) => {
            log::debug!("Thumbnail found at '{}' ({} bytes)", name, data.len());
            Some(data)
        }
        (name, Err(e)) => {
            log::warn!("Unreadable thumbnail '{}': {}", name, e);
            None
        }
    }
}
