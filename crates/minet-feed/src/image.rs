//! Image attachments for post composers.
//!
//! [`ImageAttachment::load`] turns an image file into a self-contained
//! `data:` URI that can be embedded in a post's `image_url`. [`ImageSlot`]
//! holds the pending attachment of a composer and makes concurrent loads
//! deterministic: every new selection invalidates the loads before it, so a
//! slow earlier read can never overwrite a newer choice.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::debug;

use crate::error::{FeedError, FeedResult};

/// Image file loading.
pub struct ImageAttachment;

impl ImageAttachment {
    /// Read an image file into a base64 `data:` URI.
    ///
    /// The media type is derived from the file extension; files that are not
    /// a recognized image type are rejected.
    pub fn load(path: &Path) -> FeedResult<String> {
        let subtype = media_subtype(path)
            .ok_or_else(|| FeedError::NotAnImage(path.display().to_string()))?;
        let bytes = fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "loaded image attachment");
        Ok(format!(
            "data:image/{subtype};base64,{}",
            STANDARD.encode(&bytes)
        ))
    }
}

/// Media subtype for a recognized image extension.
fn media_subtype(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("png"),
        "jpg" | "jpeg" => Some("jpeg"),
        "gif" => Some("gif"),
        "webp" => Some("webp"),
        "svg" => Some("svg+xml"),
        _ => None,
    }
}

/// A token identifying one image selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadToken(u64);

/// The pending image of a composer.
///
/// Each call to [`ImageSlot::begin`] starts a new selection generation and
/// returns its token; a completion is accepted only while its token is still
/// current. The latest *selection* therefore always wins, regardless of the
/// order in which loads finish.
#[derive(Debug, Default)]
pub struct ImageSlot {
    generation: u64,
    data: Option<String>,
}

impl ImageSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new selection, invalidating any load still in flight.
    pub fn begin(&mut self) -> LoadToken {
        self.generation += 1;
        LoadToken(self.generation)
    }

    /// Deliver the data for a selection. Returns `false` (and drops the
    /// data) if a newer selection has started since `token` was issued.
    pub fn complete(&mut self, token: LoadToken, data: String) -> bool {
        if token.0 != self.generation {
            debug!(
                stale = token.0,
                current = self.generation,
                "discarding stale image load"
            );
            return false;
        }
        self.data = Some(data);
        true
    }

    /// Remove the pending image and invalidate in-flight loads.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.data = None;
    }

    /// The pending image, if a selection has completed.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Take the pending image out of the slot, leaving it empty.
    pub fn take(&mut self) -> Option<String> {
        self.data.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A 1x1 transparent PNG.
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48,
        0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00,
        0x00, 0x1f, 0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0a, 0x49, 0x44, 0x41, 0x54, 0x78,
        0x9c, 0x63, 0x00, 0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0d, 0x0a, 0x2d, 0xb4, 0x00,
        0x00, 0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn load_png_produces_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.png");
        fs::write(&path, TINY_PNG).unwrap();

        let uri = ImageAttachment::load(&path).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.len() > "data:image/png;base64,".len());
    }

    #[test]
    fn jpeg_extensions_normalize() {
        assert_eq!(media_subtype(Path::new("a.jpg")), Some("jpeg"));
        assert_eq!(media_subtype(Path::new("a.JPEG")), Some("jpeg"));
    }

    #[test]
    fn unrecognized_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "text").unwrap();

        let err = ImageAttachment::load(&path).unwrap_err();
        assert!(matches!(err, FeedError::NotAnImage(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ImageAttachment::load(Path::new("/definitely/missing.png")).unwrap_err();
        assert!(matches!(err, FeedError::Io(_)));
    }

    #[test]
    fn slot_accepts_current_load() {
        let mut slot = ImageSlot::new();
        let token = slot.begin();
        assert!(slot.complete(token, "data:image/png;base64,AAAA".into()));
        assert_eq!(slot.data(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn stale_load_cannot_overwrite_newer_selection() {
        let mut slot = ImageSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        // The newer selection finishes first.
        assert!(slot.complete(second, "newer".into()));
        // The older selection finishes late and is discarded.
        assert!(!slot.complete(first, "older".into()));
        assert_eq!(slot.data(), Some("newer"));
    }

    #[test]
    fn clear_invalidates_in_flight_load() {
        let mut slot = ImageSlot::new();
        let token = slot.begin();
        slot.clear();

        assert!(!slot.complete(token, "late".into()));
        assert!(slot.data().is_none());
    }

    #[test]
    fn take_empties_the_slot() {
        let mut slot = ImageSlot::new();
        let token = slot.begin();
        slot.complete(token, "img".into());

        assert_eq!(slot.take(), Some("img".into()));
        assert!(slot.data().is_none());
    }
}
